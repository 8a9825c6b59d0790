/*!
# `while` / `endwhile`

```text
while
<condition>
<statements>
endwhile
```

## Purpose
Repeat a block while the condition is true.

## Remarks
The condition is checked before every pass. A loop whose condition never
becomes false runs forever.

## Example
```text
i = 1
while
(i < 4)
print i
i = i + 1
endwhile
RUN
1
2
3
```

*/
