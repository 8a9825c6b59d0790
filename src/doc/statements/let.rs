/*!
# `<variable> = <expression>`

## Purpose
Assign a value to the variable.

## Remarks
There is no `let` keyword. A variable assigned inside a function call
is local to that call. It hides any outer variable of the same name
until the call returns, and the outer one keeps its value.

## Example
```text
a = 10
print a
a = a * a
print a
RUN
10
100
```

*/
