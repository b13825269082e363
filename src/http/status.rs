use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
    pub code: u16,
    pub reason: &'static str,
}

impl Status {
    pub const fn borrowed(code: u16, reason: &'static str) -> Self {
        Self { code, reason }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code, self.reason)
    }
}

macro_rules! define_statuses {
    ($( $code:literal => $ident:ident, $reason:expr );* $(;)?) => {
        impl Status {
            $(
                pub const $ident: Status = Status::borrowed($code, $reason);
            )*

            pub const fn of(code: u16) -> Self {
                match code {
                    $(
                        $code => Status::$ident,
                    )*
                    _ => Status::borrowed(code, ""),
                }
            }
        }
    };
}

// only the codes this server can emit
define_statuses! {
    200 => OK, "OK";
    400 => BAD_REQUEST, "BAD REQUEST";
    404 => NOT_FOUND, "NOT FOUND";
    405 => METHOD_NOT_ALLOWED, "METHOD NOT ALLOWED";
    500 => INTERNAL_SERVER_ERROR, "INTERNAL SERVER ERROR";
}
