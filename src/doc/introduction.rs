/*!
# Introductory Tutorial for recdef

A recdef program is a plain text file. Each line holds one statement,
or one keyword of a block statement. Run it by passing the file name.

<pre><code>&nbsp;$ recdef hello.rd
</code></pre>

Let's start with a program that prints a number. Put the following line
in `hello.rd` and run it.

```text
print 42
```

The output is the number followed by a status line.

```text
42
PROGRAM ENDED SUCCESSFULLY.
```

Every run ends with exactly one status line. When something goes wrong,
the status line starts with a `?` and tells you what and where.

```text
print 1 / 0
```
```text
?DIVISION BY ZERO IN 1
```

Variables are named with lowercase letters only. They hold non-negative
integers of any size. Assign one with `=` and ask the user for one with
`read`. A `read` shows the prompt `> ` and waits for a number.

```text
read n
square = n * n
print square
```
```text
> 12
144
PROGRAM ENDED SUCCESSFULLY.
```

There are no negative numbers. Subtracting a larger number from a smaller
one gives zero, which is handy for counting down.

```text
print 3 - 5
```
```text
0
```

Decisions and loops are written as blocks. The condition goes on its own
line and is always wrapped in parentheses unless it is `true` or `false`.

```text
n = 5
while
(n > 0)
print n
n = n - 1
endwhile
```

Functions are named with uppercase letters and take one argument in
square brackets. Short ones are written on one line.

```text
DOUBLE[x] = x * 2
print DOUBLE[21]
```

Functions that need statements are written with `recdef`. They must finish
with `return`, and they may call themselves.

```text
recdef
FACT[n]
if
(n == 0)
then
return 1
else
return n * FACT[n - 1]
endif
endrecdef
print FACT[25]
```
```text
15511210043330985984000000
PROGRAM ENDED SUCCESSFULLY.
```

That is the whole language. The [statements](../__Chapter_2/index.html)
chapter covers each statement in detail and
[functions](../__Chapter_3/index.html) explains how functions see the
variables around them.

*/
