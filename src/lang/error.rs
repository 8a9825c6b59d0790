use super::LineNumber;
use std::rc::Rc;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: u16,
    line_number: LineNumber,
    message: Rc<str>,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            line_number: None,
            message: "".into(),
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code as u16
    }

    pub fn is_syntax(&self) -> bool {
        (20..30).contains(&self.code)
    }

    pub fn is_runtime(&self) -> bool {
        (30..50).contains(&self.code)
    }

    /// True when no source line has been attached yet.
    pub fn is_direct(&self) -> bool {
        self.line_number.is_none()
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn message_str(&self) -> &str {
        &self.message
    }

    pub fn in_line_number(&self, line: LineNumber) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            code: self.code,
            line_number: line,
            message: self.message.clone(),
        }
    }

    /// Attaches `line` unless an inner statement already did.
    pub fn or_line_number(self, line: usize) -> Error {
        if self.is_direct() {
            self.in_line_number(Some(line))
        } else {
            self
        }
    }

    pub fn message(&self, message: &str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            code: self.code,
            line_number: self.line_number,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    AlreadyRun = 10,
    FileNotFound = 11,
    InvalidLine = 20,
    InvalidReturn = 21,
    ExpectedThen = 22,
    ExpectedElse = 23,
    ExpectedEndif = 24,
    ExpectedEndwhile = 25,
    ExpectedEndrecdef = 26,
    DivisionByZero = 30,
    InvalidInput = 31,
    UndefinedVariable = 32,
    UndefinedFunction = 33,
    MissingReturn = 34,
    OutOfMemory = 40,
    InternalError = 51,
    IoError = 57,
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Error {
        error!(IoError; &error.to_string())
    }
}

impl std::error::Error for Error {}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            10 => "ALREADY RUN",
            11 => "FILE NOT FOUND",
            20 => "INVALID LINE",
            21 => "RETURN OUTSIDE RECDEF",
            22 => "EXPECTED THEN",
            23 => "EXPECTED ELSE",
            24 => "EXPECTED ENDIF",
            25 => "EXPECTED ENDWHILE",
            26 => "EXPECTED ENDRECDEF",
            30 => "DIVISION BY ZERO",
            31 => "INVALID INPUT",
            32 => "UNDEFINED VARIABLE",
            33 => "UNDEFINED FUNCTION",
            34 => "MISSING RETURN",
            40 => "OUT OF MEMORY",
            51 => "INTERNAL ERROR",
            57 => "I/O ERROR",
            _ => "",
        };
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" {}", line_number));
        }
        let message = if self.message.is_empty() {
            String::new()
        } else {
            format!("; {}", self.message)
        };
        if code_str.is_empty() {
            if suffix.is_empty() {
                write!(f, "PROGRAM ERROR {}{}", self.code, message)
            } else {
                write!(f, "PROGRAM ERROR {} IN{}{}", self.code, suffix, message)
            }
        } else if suffix.is_empty() {
            write!(f, "{}{}", code_str, message)
        } else {
            write!(f, "{} IN{}{}", code_str, suffix, message)
        }
    }
}
