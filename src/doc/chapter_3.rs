/*!
# Functions

A function takes exactly one argument and produces one number. One line
functions are written `NAME[x] = expression`. Functions that need
statements are written with `recdef` and finish through `return`.

## Linking

When a definition runs, every name the body only reads is linked to the variable or function of that name right then. The link
is to the storage, not to the current value. Later assignments are seen
by the function.

```text
base = 10
SHIFT[x] = x * base
base = 100
print SHIFT[3]
RUN
300
```

A name that does not exist yet is linked anyway. It must be defined
before the function is called, otherwise the call fails with
`UNDEFINED VARIABLE` or `UNDEFINED FUNCTION`. This is how a function can
call itself, or call one that is defined further down the program.

```text
EVEN[n] = ODD[n]
recdef
ODD[n]
return n % 2
endrecdef
print EVEN[4]
RUN
0
```

## The argument

The argument is never linked. It is bound fresh on every call and the
binding is removed when the call finishes, so recursive calls each see
their own value and the caller's variable of the same name is untouched.

```text
n = 7
SQUARE[n] = n * n
print SQUARE[3]
print n
RUN
9
7
```

## Local variables

Anything a `recdef` body assigns with `=`, reads with `read` or defines
is local to the call. It hides an outer name while the call runs and is
gone when the call returns. The outer variable or function is never
changed, and every level of a recursion has its own locals.

```text
t = 1
recdef
SUM[n]
if
(n == 0)
then
return 0
else
t = n
s = SUM[n - 1]
return t + s
endif
endrecdef
print SUM[3]
print t
RUN
6
1
```

## Limits

Calls may nest as deep as memory allows. A runaway recursion is stopped
with `OUT OF MEMORY; TOO MANY NESTED CALLS`.

*/
