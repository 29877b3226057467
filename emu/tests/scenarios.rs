use arch::Reg;
use pvm::hooks::{stall::Stall, Hook};
use pvm::{Exit, State};

const TMAX: u64 = 100_000;

fn state(code: &str) -> State {
    State::new(code.lines().map(String::from).collect())
}

/// Runs `code` to completion (bounded) and compares the final report.
fn assert(code: &str, expect: &str) {
    let mut state = state(code);
    assert_eq!(state.run_for(TMAX), Exit::Halted, "program did not halt");
    assert_eq!(state.vars().to_string(), expect);
}

macro_rules! case {
    ($name:ident, $code:expr, $expect:expr) => {
        #[test]
        fn $name() {
            assert($code, $expect);
        }
    };
}

case!(
    sum_of_two,
    ".data\nsum: .word 0\n.text\nMOV R1, #3\nMOV R2, #4\nADD R3, R1, R2\nLDR R0, =sum\nSTR R3, [R0]",
    "sum = 7\n"
);

case!(data_only, ".data\nx: .word 7", "x = 7\n");
case!(nothing, "", "");
case!(comments_only, "; nothing\n  ; at all", "");

case!(
    sub_mul_div,
    "\
.data
d: .word 0
p: .word 0
q: .word 0
.text
MOV R1, #20
MOV R2, #6
SUB R3, R1, R2
LDR R0, =d
STR R3, [R0]
MUL R3, R1, R2
LDR R0, =p
STR R3, [R0]
SDIV R3, R1, R2
LDR R0, =q
STR R3, [R0]",
    "d = 14\np = 120\nq = 3\n"
);

// Arithmetic always reads R1, R2 and writes R3
case!(
    arithmetic_ignores_operands,
    "\
.data
r: .word 0
.text
MOV R1, #2
MOV R2, #5
MOV R7, #100
ADD R7, R7, R7
LDR R0, =r
STR R3, [R0]",
    "r = 7\n"
);

case!(
    divide_by_zero,
    "\
.data
q: .word 0
.text
MOV R1, #9
MOV R2, #0
SDIV R3, R1, R2
LDR R0, =q
STR R3, [R0]",
    "q = 9\n"
);

case!(
    implicit_variables_keep_order,
    "\
.data
a: .word 1
.text
LDR R0, =tmp
MOV R1, #4
STR R1, [R0]
LDR R0, =a
LDR R2, [R0]",
    "a = 1\ntmp = 4\n"
);

case!(
    fallback_declaration,
    ".data\nbad: .word lots\nok: .word 2",
    "bad = 0\nok = 2\n"
);

case!(
    countdown_loop,
    "\
.data
n: .word 5
steps: .word 0
.text
LDR R4, =n
LDR R5, =steps
MOV R6, #0
loop:
LDR R1, [R4]
CMP R1, #0
BEQ done
MOV R2, #1
SUB R3, R1, R2
STR R3, [R4]
MOV R1, R6
ADD R3, R1, R2
MOV R6, R3
STR R6, [R5]
B loop
done:",
    "n = 0\nsteps = 5\n"
);

case!(
    undefined_branch_falls_through,
    "\
.data
x: .word 0
.text
MOV R1, #1
B missing
LDR R0, =x
STR R1, [R0]",
    "x = 1\n"
);

case!(
    unknown_lines_are_skipped,
    "\
.data
x: .word 0
.text
PUSH {R1}
BL helper
MOV R1, #banana
mov R1, #2
MOV R1, #3
LDR R0, =x
STR R1, [R0]",
    "x = 3\n"
);

// A `.` anywhere on the line turns it into a directive, comments included
case!(
    dotted_lines_are_skipped,
    "\
.data
x: .word 0
.text
MOV R1, #4
MOV R1, #1 ; see x.y
LDR R0, =a.b
LDR R0, =x
STR R1, [R0]",
    "x = 4\n"
);

case!(
    duplicate_label_uses_first,
    "\
.data
x: .word 0
.text
B target
target:
MOV R1, #1
B end
target:
MOV R1, #2
end:
LDR R0, =x
STR R1, [R0]",
    "x = 1\n"
);

// Shape of the code generator's output: `.data` at the end, helpers that
// the interpreter does not understand. `CMP R1, R2` has no register form, so
// the flag stays 0 and BGT falls through.
case!(
    generated_program,
    "\
\t.text
\t.global _start
_start:
\t; x = 5
    MOV R1, #5
    LDR R2, =x
    STR R1, [R2]
\t; t1 = x > 3
    LDR R1, =x
    LDR R1, [R1]
    MOV R2, #3
    CMP R1, R2
    BGT LBL_true_0
    MOV R3, #0
    B LBL_end_0
LBL_true_0:
    MOV R3, #1
LBL_end_0:
    LDR R4, =t1
    STR R3, [R4]
\t; print x
    LDR R0, =x
    LDR R0, [R0]
    BL _print_int
    B _exit
\t/* runtime helpers */
_print_int:
    ; stub print
    BX LR
_exit:
    BX LR

\t.data
x: .word 0
t1: .word 0",
    "x = 5\nt1 = 0\n"
);

#[test]
fn cmp_then_beq() {
    for (value, imm, taken) in [(4, 4, true), (4, 5, false), (-2, -2, true), (0, 1, false)] {
        let code = format!(
            "MOV R1, #{value}\nCMP R1, #{imm}\nBEQ yes\nMOV R9, #1\nB end\nyes:\nMOV R9, #2\nend:"
        );
        let mut state = state(&code);
        state.run();
        assert_eq!(state.get(Reg::R9), if taken { 2 } else { 1 }, "{value} vs {imm}");
    }
}

#[test]
fn store_then_load_same_slot() {
    let mut state = state(
        "\
.data
a: .word 0
x: .word 0
.text
MOV R2, #-31
LDR R5, =x
STR R2, [R5]
LDR R7, [R5]",
    );
    state.run();
    assert_eq!(state.get(Reg::R5), 1);
    assert_eq!(state.get(Reg::R7), -31);
    assert_eq!(state.vars().get("x"), Some(-31));
    assert_eq!(state.vars().get("a"), Some(0));
}

#[test]
fn endless_loop_needs_a_bound() {
    let mut state = state(".data\nx: .word 3\n.text\nloop:\nMOV R1, #1\nB loop");
    assert_eq!(state.run_for(TMAX), Exit::StepLimit);
    assert_eq!(state.vars().to_string(), "x = 3\n");
}

#[test]
fn endless_loop_detected() {
    let mut hooks: Vec<Box<dyn Hook>> = vec![Box::new(Stall::new())];
    let state = state("loop:\nMOV R1, #1\nB loop");
    let (_, exit) = pvm::hooks::drive(state, &mut hooks, Some(TMAX));
    assert_eq!(exit, Exit::Stalled);
}

#[test]
fn independent_states() {
    let code = ".data\nx: .word 0\n.text\nMOV R1, #8\nLDR R0, =x\nSTR R1, [R0]";
    let mut a = state(code);
    let b = state(code);
    a.run();
    assert_eq!(a.vars().get("x"), Some(8));
    assert_eq!(b.vars().get("x"), Some(0));
    assert_eq!(b.get(Reg::R1), 0);
}

#[test]
fn prebuilt_tables() {
    let lines: Vec<String> = ["LDR R0, =y", "MOV R1, #6", "STR R1, [R0]"]
        .into_iter()
        .map(String::from)
        .collect();
    let (mut vars, labels) = pvm::loader::load(&lines);
    vars.set("x", 1);
    vars.set("y", 2);
    let mut state = State::with_tables(lines, vars, labels);
    state.run();
    assert_eq!(state.into_vars().to_string(), "x = 1\ny = 6\n");
}
