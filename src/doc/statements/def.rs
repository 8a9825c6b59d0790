/*!
# `<FUNCTION>[<variable>] = <expression>`

## Purpose
Define a one line function.

## Remarks
Every name in the expression other than the argument is linked to the
variable or function of that name as it exists when the definition runs.
Assigning that variable later changes what the function computes. The
argument is bound fresh on every call.

Defining a function again replaces it everywhere it is used, including
inside functions defined earlier. A definition inside a function call is
local to that call.

## Example
```text
rate = 3
COST[n] = n * rate
print COST[10]
rate = 5
print COST[10]
RUN
30
50
```

*/
