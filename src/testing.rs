//! Helpers shared by the test modules.

use std::{
    cell::RefCell,
    panic::{self, UnwindSafe},
    sync::Once,
};

use proptest::prelude::*;

use crate::Value;

thread_local! {
    static LAST_PANIC_LOCATION: RefCell<Option<(String, u32)>> = const { RefCell::new(None) };
}

/// Run `f`, which must panic, and get the file and line the panic was
/// reported at.
///
/// The panic hook is installed once for the whole test binary. It records the
/// location per thread and then defers to the previous hook, so panics in
/// other tests still print normally.
pub(crate) fn panic_location<R>(f: impl FnOnce() -> R + UnwindSafe) -> Option<(String, u32)> {
    static HOOK: Once = Once::new();

    HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let location = info
                .location()
                .map(|location| (location.file().to_owned(), location.line()));

            LAST_PANIC_LOCATION.with(|last| *last.borrow_mut() = location);
            previous(info);
        }));
    });

    LAST_PANIC_LOCATION.with(|last| last.borrow_mut().take());
    panic::catch_unwind(f).err()?;
    LAST_PANIC_LOCATION.with(|last| last.borrow_mut().take())
}

/// Any value of any kind, including NaNs.
pub(crate) fn any_value() -> impl Strategy<Value = Value<'static>> {
    let integers = prop_oneof![
        any::<isize>().prop_map(Value::from),
        any::<i8>().prop_map(Value::from),
        any::<i16>().prop_map(Value::from),
        any::<i32>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<usize>().prop_map(Value::from),
        any::<u8>().prop_map(Value::from),
        any::<u16>().prop_map(Value::from),
        any::<u32>().prop_map(Value::from),
        any::<u64>().prop_map(Value::from),
    ];

    let others = prop_oneof![
        Just(Value::Nil),
        any::<bool>().prop_map(Value::from),
        any::<f32>().prop_map(Value::from),
        any::<f64>().prop_map(Value::from),
        any::<char>().prop_map(Value::from),
        ".*".prop_map(Value::from),
    ];

    prop_oneof![integers, others]
}

pub(crate) fn is_nan(value: &Value<'_>) -> bool {
    match *value {
        Value::Float32(value) => value.is_nan(),
        Value::Float64(value) => value.is_nan(),
        _ => false,
    }
}
