/// Canonical reason phrase of a status code.
///
/// The mapping covers the registered codes of the 100..=511 range. Codes
/// outside the registry resolve to `"Unknown"`, so the function is total and
/// has no failure mode.
pub fn reason_phrase(status: u16) -> &'static str {
    registered(status).unwrap_or("Unknown")
}

pub(crate) fn registered(status: u16) -> Option<&'static str> {
    let phrase = match status {
        100 => "Continue",
        101 => "Switching Protocols",
        102 => "Processing",
        103 => "Early Hints",

        200 => "OK",
        201 => "Created",
        202 => "Accepted",
        203 => "Non-Authoritative Information",
        204 => "No Content",
        205 => "Reset Content",
        206 => "Partial Content",
        207 => "Multi-Status",
        208 => "Already Reported",
        226 => "IM Used",

        300 => "Multiple Choices",
        301 => "Moved Permanently",
        302 => "Found",
        303 => "See Other",
        304 => "Not Modified",
        305 => "Use Proxy",
        306 => "Switch Proxy",
        307 => "Temporary Redirect",
        308 => "Permanent Redirect",

        400 => "Bad Request",
        401 => "Unauthorized",
        402 => "Payment Required",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        406 => "Not Acceptable",
        407 => "Proxy Authentication Required",
        408 => "Request Timeout",
        409 => "Conflict",
        410 => "Gone",
        411 => "Length Required",
        412 => "Precondition Failed",
        413 => "Payload Too Large",
        414 => "URI Too Long",
        415 => "Unsupported Media Type",
        416 => "Range Not Satisfiable",
        417 => "Expectation Failed",
        421 => "Misdirected Request",
        422 => "Unprocessable Entity",
        423 => "Locked",
        424 => "Failed Dependency",
        425 => "Too Early",
        426 => "Upgrade Required",
        427 => "Unassigned",
        428 => "Precondition Required",
        429 => "Too Many Requests",
        431 => "Request Header Fields Too Large",
        451 => "Unavailable For Legal Reasons",

        500 => "Internal Server Error",
        501 => "Not Implemented",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        505 => "HTTP Version Not Supported",
        506 => "Variant Also Negotiates",
        507 => "Insufficient Storage",
        508 => "Loop Detected",
        510 => "Not Extended",
        511 => "Network Authentication Required",

        _ => return None,
    };

    Some(phrase)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn registered_codes() {
        assert_eq!(reason_phrase(100), "Continue");
        assert_eq!(reason_phrase(200), "OK");
        assert_eq!(reason_phrase(226), "IM Used");
        assert_eq!(reason_phrase(301), "Moved Permanently");
        assert_eq!(reason_phrase(306), "Switch Proxy");
        assert_eq!(reason_phrase(404), "Not Found");
        assert_eq!(reason_phrase(427), "Unassigned");
        assert_eq!(reason_phrase(451), "Unavailable For Legal Reasons");
        assert_eq!(reason_phrase(500), "Internal Server Error");
        assert_eq!(reason_phrase(511), "Network Authentication Required");
    }

    #[test]
    fn unregistered_codes_default() {
        assert_eq!(reason_phrase(0), "Unknown");
        assert_eq!(reason_phrase(99), "Unknown");
        assert_eq!(reason_phrase(430), "Unknown");
        assert_eq!(reason_phrase(509), "Unknown");
        assert_eq!(reason_phrase(999), "Unknown");
    }
}
