/*!
# `renum [OPTIONS] -i input.bas -o output.bas`

## Purpose
Give a BASIC program fresh line numbers.

## Remarks
The input is sorted by line number first. If no line has a number yet,
every line is numbered from `--start` upward. Otherwise the program is
renumbered and every statement that targets a line number is updated
to match. A failure leaves the output file unwritten.

| Option | Meaning |
|---|---|
| `-i FILE` | The input file |
| `-o FILE` | The output file (default: output.bas) |
| `--start LINE_NUMBER` | The starting line number (default: 10) |
| `--old-start LINE_NUMBER` | Lines numbered below this keep their numbers (must be 1 or more) |
| `--step LINE_NUMBER` | The step between line numbers (default: 10) |
| `--force` | Keep going past missing line numbers and unresolvable references |

A UTF-8 byte order mark on the input is carried over to the output.

## Example
```text
renum -i game.bas -o game2.bas
renum -i game.bas -o game2.bas --start 1000 --step 20
renum -i game.bas -o game2.bas --old-start 100
```

*/
