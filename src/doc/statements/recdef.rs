/*!
# `recdef` / `endrecdef`

```text
recdef
<FUNCTION>[<variable>]
<statements>
endrecdef
```

## Purpose
Define a function whose body is a block of statements.

## Remarks
The body must finish through `return`. Falling off the end reports
`MISSING RETURN` with the function name. The function may call itself and
may call functions that are defined later in the program, as long as
they exist by the time the call happens.

## Example
```text
recdef
FIB[n]
if
(n < 2)
then
return n
else
return FIB[n - 1] + FIB[n - 2]
endif
endrecdef
print FIB[20]
RUN
6765
```

*/
