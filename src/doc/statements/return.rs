/*!
# `return <expression>`

## Purpose
Finish the current `recdef` function with a value.

## Remarks
Only valid inside a `recdef` body. Anywhere else it is reported as
`RETURN OUTSIDE RECDEF` before the program starts. A `return` inside a
`while` loop leaves the loop and the function at once.

## Example
```text
recdef
FIRSTDIV[n]
d = 2
while
true
if
((n % d) == 0)
then
return d
else
endif
d = d + 1
endwhile
endrecdef
print FIRSTDIV[91]
RUN
7
```

*/
