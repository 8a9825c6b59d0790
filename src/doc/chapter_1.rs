/*!
# Expressions and Numbers

Every value in recdef is a non-negative integer with no upper limit.
There are no strings, no fractions and no negative numbers. A value is
true when it is not zero.

## Names

Variable names are one or more lowercase ASCII letters. Function names
are one or more uppercase ASCII letters. Digits, underbars and mixed case
are not allowed anywhere in a name.

```text
count = 1
SQUARE[x] = x * x
```

## Arithmetic

| Operator | Meaning |
|----------|---------|
| `+` | Addition |
| `-` | Subtraction, never below zero |
| `*` | Multiplication |
| `/` | Integer division, rounding down |
| `%` | Remainder |

`*`, `/` and `%` bind tighter than `+` and `-`. Operators of the same
precedence group to the left, so `10 - 4 - 3` is `3`. Parentheses group
as usual. Dividing by zero stops the program with `DIVISION BY ZERO`.

```text
print (2 + 3) * 4
20
print 7 / 2
3
print 7 % 2
1
print 2 - 7
0
```

## Conditions

Conditions appear only on the guard line of `if` and `while`. Each
comparison and each logical operator must be wrapped in its own
parentheses.

| Form | Meaning |
|------|---------|
| `true`, `false` | Constants |
| `(a < b)`, `(a > b)`, `(a == b)` | Compare two expressions |
| `(c && d)`, `(c \|\| d)` | Both, either |
| `!(c)` | Not |

`&&` and `||` stop as soon as the answer is known, so the right side may
be skipped entirely.

```text
if
((n > 0) && (100 / n > 3))
then
print n
else
endif
```

*/
