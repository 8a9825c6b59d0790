/*!
# `if` / `then` / `else` / `endif`

```text
if
<condition>
then
<statements>
else
<statements>
endif
```

## Purpose
Run one of two blocks depending on a condition.

## Remarks
Every keyword sits on its own line. The `else` line is required even when
the second block is empty. Missing keywords are reported as
`EXPECTED THEN`, `EXPECTED ELSE` or `EXPECTED ENDIF`.

## Example
```text
read n
if
((n % 2) == 0)
then
print 0
else
print 1
endif
RUN
> 7
1
```

*/
