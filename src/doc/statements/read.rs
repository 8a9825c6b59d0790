/*!
# `read <variable>`

## Purpose
Read a number from the input and assign it to the variable.

## Remarks
The prompt `> ` is shown first. Input is split on whitespace so several
numbers on one line feed several `read` statements. Anything that is not
a plain decimal number, or running out of input, stops the program with
`INVALID INPUT`.

## Example
```text
read a
read b
print a + b
RUN
> 3 4
7
```

*/
