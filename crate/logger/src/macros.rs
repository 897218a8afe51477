/// Build the plain-form message of a list of operands and hand it to `$body`.
#[doc(hidden)]
#[macro_export]
macro_rules! __operands {
    (|$message:ident| $body:expr; $($arg:expr),+) => {{
        #[allow(unused_imports)]
        use $crate::{DisplayOperand as _, TextOperand as _};
        match $crate::Operands(&[$((&&$crate::OperandKind(&$arg)).__operand()),+]) {
            $message => $body,
        }
    }};
}

/// Log the operands at the info level, separating adjacent non-string
/// operands with a space.
///
/// Logs to the default logger, or to the one given with `logger: <expr>,`.
#[macro_export]
macro_rules! info {
    (logger: $logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::__operands!(|message| $logger.info(message); $($arg),+)
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::__operands!(|message| $crate::info(message); $($arg),+)
    };
}

/// Log a formatted message at the info level.
#[macro_export]
macro_rules! infof {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.infof(::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::infof(::core::format_args!($($arg)+))
    };
}

/// Log the operands at the warning level, separating adjacent non-string
/// operands with a space.
///
/// Logs to the default logger, or to the one given with `logger: <expr>,`.
#[macro_export]
macro_rules! warning {
    (logger: $logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::__operands!(|message| $logger.warning(message); $($arg),+)
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::__operands!(|message| $crate::warning(message); $($arg),+)
    };
}

/// Log a formatted message at the warning level.
#[macro_export]
macro_rules! warningf {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.warningf(::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::warningf(::core::format_args!($($arg)+))
    };
}

/// Log the operands at the error level, separating adjacent non-string
/// operands with a space.
///
/// Logs to the default logger, or to the one given with `logger: <expr>,`.
#[macro_export]
macro_rules! error {
    (logger: $logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::__operands!(|message| $logger.error(message); $($arg),+)
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::__operands!(|message| $crate::error(message); $($arg),+)
    };
}

/// Log a formatted message at the error level.
#[macro_export]
macro_rules! errorf {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.errorf(::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::errorf(::core::format_args!($($arg)+))
    };
}

/// Log the operands at the fatal level, separating adjacent non-string
/// operands with a space.
///
/// Logs to the default logger, or to the one given with `logger: <expr>,`.
#[macro_export]
macro_rules! fatal {
    (logger: $logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::__operands!(|message| $logger.fatal(message); $($arg),+)
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::__operands!(|message| $crate::fatal(message); $($arg),+)
    };
}

/// Log a formatted message at the fatal level.
#[macro_export]
macro_rules! fatalf {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.fatalf(::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::fatalf(::core::format_args!($($arg)+))
    };
}

/// Log the operands at the info level if the verbosity allows it.
#[macro_export]
macro_rules! v_info {
    (logger: $logger:expr, $v:expr, $($arg:expr),+ $(,)?) => {
        $crate::__operands!(|message| $logger.v_info($v, message); $($arg),+)
    };
    ($v:expr, $($arg:expr),+ $(,)?) => {
        $crate::__operands!(|message| $crate::v_info($v, message); $($arg),+)
    };
}

/// Log a formatted message at the info level if the verbosity allows it.
#[macro_export]
macro_rules! v_infof {
    (logger: $logger:expr, $v:expr, $($arg:tt)+) => {
        $logger.v_infof($v, ::core::format_args!($($arg)+))
    };
    ($v:expr, $($arg:tt)+) => {
        $crate::v_infof($v, ::core::format_args!($($arg)+))
    };
}

/// Log the operands at the warning level if the verbosity allows it.
#[macro_export]
macro_rules! v_warning {
    (logger: $logger:expr, $v:expr, $($arg:expr),+ $(,)?) => {
        $crate::__operands!(|message| $logger.v_warning($v, message); $($arg),+)
    };
    ($v:expr, $($arg:expr),+ $(,)?) => {
        $crate::__operands!(|message| $crate::v_warning($v, message); $($arg),+)
    };
}

/// Log a formatted message at the warning level if the verbosity allows it.
#[macro_export]
macro_rules! v_warningf {
    (logger: $logger:expr, $v:expr, $($arg:tt)+) => {
        $logger.v_warningf($v, ::core::format_args!($($arg)+))
    };
    ($v:expr, $($arg:tt)+) => {
        $crate::v_warningf($v, ::core::format_args!($($arg)+))
    };
}

/// Log the operands at the error level if the verbosity allows it.
#[macro_export]
macro_rules! v_error {
    (logger: $logger:expr, $v:expr, $($arg:expr),+ $(,)?) => {
        $crate::__operands!(|message| $logger.v_error($v, message); $($arg),+)
    };
    ($v:expr, $($arg:expr),+ $(,)?) => {
        $crate::__operands!(|message| $crate::v_error($v, message); $($arg),+)
    };
}

/// Log a formatted message at the error level if the verbosity allows it.
#[macro_export]
macro_rules! v_errorf {
    (logger: $logger:expr, $v:expr, $($arg:tt)+) => {
        $logger.v_errorf($v, ::core::format_args!($($arg)+))
    };
    ($v:expr, $($arg:tt)+) => {
        $crate::v_errorf($v, ::core::format_args!($($arg)+))
    };
}
