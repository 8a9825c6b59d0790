/*!
# Error Messages

Every run ends with one status line. Errors are written as
`?<MESSAGE> IN <line>` followed by `; <detail>` when there is one, for
example `?UNDEFINED VARIABLE IN 4; total`. Lines are counted from one.
A missing end keyword is reported at the line after the end of the file.

## Program errors

These are found before anything runs. Nothing is printed and no input is
read.

| Code | Message | Cause |
|------|---------|-------|
| 20 | `INVALID LINE` | The line is not a statement, a name has the wrong case, or brackets do not balance. |
| 21 | `RETURN OUTSIDE RECDEF` | `return` used outside a `recdef` body. |
| 22 | `EXPECTED THEN` | The line after an `if` condition is not `then`. |
| 23 | `EXPECTED ELSE` | An `if` block ran out before its `else`. |
| 24 | `EXPECTED ENDIF` | An `if` block ran out before its `endif`. |
| 25 | `EXPECTED ENDWHILE` | A `while` block ran out before its `endwhile`. |
| 26 | `EXPECTED ENDRECDEF` | A `recdef` block ran out before its `endrecdef`. |

## Run errors

These stop the program where they happen. Output printed before the
error stays printed.

| Code | Message | Cause |
|------|---------|-------|
| 30 | `DIVISION BY ZERO` | The right side of `/` or `%` is zero. |
| 31 | `INVALID INPUT` | `read` got something other than a decimal number, or the input ended. |
| 32 | `UNDEFINED VARIABLE` | A variable was used before it was assigned. |
| 33 | `UNDEFINED FUNCTION` | A function was called before it was defined. |
| 34 | `MISSING RETURN` | A `recdef` body finished without `return`. |
| 40 | `OUT OF MEMORY` | Calls nested too deep. |

## Other errors

| Code | Message | Cause |
|------|---------|-------|
| 10 | `ALREADY RUN` | A runtime was asked to run a second program. |
| 11 | `FILE NOT FOUND` | The program file does not exist. |
| 51 | `INTERNAL ERROR` | Please report this. |
| 57 | `I/O ERROR` | Reading input or writing output failed. |

*/
