/// Runs `$run` and asserts that it panics. With a second argument, also asserts that the panic
/// message contains the given text.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert!(
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)).is_err(),
            "assertion failed to panic"
        );
    };
    ($run:block, $needle:expr) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)) {
            Ok(_) => panic!("assertion failed to panic, expected: {}", $needle),
            Err(payload) => {
                let message = $crate::util::panic::payload_message(&*payload);
                assert!(
                    message.contains($needle),
                    "panic message {:?} doesn't mention {:?}",
                    message,
                    $needle
                );
            }
        }
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;

/// Extracts the formatted message from a panic payload.
#[allow(unused)]
pub fn payload_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else {
        String::new()
    }
}
