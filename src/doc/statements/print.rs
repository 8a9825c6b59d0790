/*!
# `print <expression>`

## Purpose
Write the value of the expression followed by a newline.

## Example
```text
print 2 * 1000000000 * 1000000000
RUN
2000000000000000000
```

*/
