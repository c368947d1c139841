//! Machine Context Unit Tests.
//!
//! Verifies reset values, named register access, the absence of register
//! aliasing, and the snapshot text and JSON forms.

use cisc16_core::core::{Flags, MachineContext, Register};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn reset_values() {
    let ctx = MachineContext::new();
    let snap = ctx.snapshot();
    assert_eq!(snap.stack_pointer, 0x7FFF);
    assert_eq!(snap.program_counter, 0xFE00);
    assert_eq!(
        [snap.ax, snap.bx, snap.cx, snap.dx, snap.si, snap.di],
        [0; 6]
    );
    assert!(!snap.carry);
    assert!(!snap.zero);
}

#[test]
fn default_matches_new() {
    assert_eq!(MachineContext::default(), MachineContext::new());
}

#[test]
fn reset_restores_everything() {
    let mut ctx = MachineContext::new();
    for (i, reg) in Register::ALL.into_iter().enumerate() {
        ctx.write(reg, 0x1000 + i as u16);
    }
    ctx.flags = Flags {
        carry: true,
        zero: true,
    };

    ctx.reset();
    assert_eq!(ctx, MachineContext::new());
}

#[rstest]
#[case(Register::Ax)]
#[case(Register::Bx)]
#[case(Register::Cx)]
#[case(Register::Dx)]
#[case(Register::Si)]
#[case(Register::Di)]
#[case(Register::Sp)]
#[case(Register::Pc)]
fn write_is_independent(#[case] target: Register) {
    let mut ctx = MachineContext::new();
    let before = ctx.clone();
    ctx.write(target, 0xBEEF);

    assert_eq!(ctx.read(target), 0xBEEF);
    for reg in Register::ALL.into_iter().filter(|&r| r != target) {
        assert_eq!(ctx.read(reg), before.read(reg), "{reg} changed");
    }
    assert_eq!(ctx.flags, before.flags);
}

#[test]
fn named_access_matches_fields() {
    let mut ctx = MachineContext::new();
    ctx.cx = 0x1234;
    ctx.write(Register::Di, 0x5678);
    assert_eq!(ctx.read(Register::Cx), 0x1234);
    assert_eq!(ctx.di, 0x5678);
}

#[test]
fn flags_are_independent() {
    let mut ctx = MachineContext::new();
    ctx.flags.carry = true;
    assert!(!ctx.flags.zero);
    ctx.flags.zero = true;
    ctx.flags.carry = false;
    assert!(ctx.flags.zero);
}

#[test]
fn register_names() {
    let names: Vec<&str> = Register::ALL.iter().map(|r| r.name()).collect();
    assert_eq!(names, vec!["AX", "BX", "CX", "DX", "SI", "DI", "SP", "PC"]);
}

#[test]
fn snapshot_text_after_reset() {
    let text = MachineContext::new().snapshot().to_string();
    assert_eq!(
        text,
        "=== CPU State ===\n\
         AX:0000 BX:0000 CX:0000 DX:0000\n\
         SI:0000 DI:0000 SP:7FFF PC:FE00\n\
         Flags: CF=false ZF=false"
    );
}

#[test]
fn snapshot_text_uses_upper_hex() {
    let mut ctx = MachineContext::new();
    ctx.ax = 0xabcd;
    ctx.si = 0x000f;
    ctx.flags.carry = true;
    let text = ctx.snapshot().to_string();
    assert!(text.contains("AX:ABCD"));
    assert!(text.contains("SI:000F"));
    assert!(text.contains("CF=true ZF=false"));
}

#[test]
fn snapshot_is_a_copy() {
    let mut ctx = MachineContext::new();
    let snap = ctx.snapshot();
    ctx.ax = 1;
    assert_eq!(snap.ax, 0);
}

#[test]
fn snapshot_json_fields() {
    let snap = MachineContext::new().snapshot();
    let json = serde_json::to_value(snap).unwrap();
    assert_eq!(json["stack_pointer"].as_u64(), Some(0x7FFF));
    assert_eq!(json["program_counter"].as_u64(), Some(0xFE00));
    assert_eq!(json["carry"].as_bool(), Some(false));
    assert_eq!(json["zero"].as_bool(), Some(false));
}
