/*!
# Keywords

Statements whose operands are line numbers and get rewritten when a
program is renumbered.

## Remarks
`GOTO` and `GOSUB` also match their split spellings `GO TO` and
`GO SUB`, and a comma list after either keeps every entry updated, as
in `ON X GOTO 100,200,300`. An asterisk introduces a label operand,
which is left alone without ending the list.

`LIST`, `LLIST`, and `DELETE` take a range, so both ends of
`LIST 100-200` are updated and the minus sign survives.

Everything after `REM` or `'` is a remark and is never touched. Text
inside double quotes is never touched either.

| Keyword | Operand |
|---|---|
| `GOTO`, `GOSUB`, `GO TO`, `GO SUB` | line, or comma list of lines |
| `THEN`, `ELSE` | line |
| `RESUME`, `RESTORE`, `RETURN`, `RUN`, `EDIT`, `AUTO` | line |
| `LIST`, `LLIST`, `DELETE` | line range |

## Example
```text
10 ON X GOSUB 100,200,*HELP
20 IF X=0 THEN 100 ELSE 200
30 LIST 100-200 ' GOTO 100 here is a remark
```

*/
