use tracing::debug;

use crate::bytes::BytesMut;
use crate::status;

/// interim response used by transport when handling `Expect: 100-continue` request.
pub const CONTINUE: &[u8; 25] = b"HTTP/1.1 100 Continue\r\n\r\n";

// byte span inside the cache buffer. only meaningful against the buffer state
// that produced it. [ResponseEncoder::clear] invalidates every recorded span.
#[derive(Clone, Copy, Default)]
struct Range {
    off: usize,
    len: usize,
}

impl Range {
    fn resolve<'b>(&self, buf: &'b [u8]) -> &'b [u8] {
        &buf[self.off..self.off + self.len]
    }
}

#[derive(Clone, Copy)]
struct HeaderIndex {
    name: Range,
    value: Range,
}

/// Serializer of http/1 response wire format.
///
/// All building operations append to one owned cache buffer and record the
/// span of what they just wrote. Accessors resolve recorded spans against the
/// current buffer and return borrowed views. A view stays valid until the next
/// mutating call on the same encoder, which the borrow checker enforces: every
/// mutating operation takes `&mut self`.
///
/// One encoder holds exactly one in progress message. [ResponseEncoder::begin]
/// discards the previous message before writing the new start line.
///
/// The output layout is:
///
/// ```text
/// <protocol> <status-code> <reason-phrase>\r\n
/// <name-1>: <value-1>\r\n
/// ...
/// <name-n>: <value-n>\r\n
/// \r\n
/// <body-bytes>
/// ```
pub struct ResponseEncoder {
    buf: BytesMut,
    status: u16,
    protocol: Range,
    reason: Range,
    headers: Vec<HeaderIndex>,
    body: Range,
    // declared body length. can exceed body.len when the body bytes are not
    // buffered here. see [ResponseEncoder::set_body_length].
    body_len: usize,
}

impl Default for ResponseEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseEncoder {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// construct encoder with pre-allocated cache buffer.
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(cap),
            status: 0,
            protocol: Range::default(),
            reason: Range::default(),
            headers: Vec::new(),
            body: Range::default(),
            body_len: 0,
        }
    }

    /// reset encoder to the empty state: no status, no recorded spans, empty
    /// cache buffer. idempotent.
    pub fn clear(&mut self) {
        self.status = 0;
        self.protocol = Range::default();
        self.reason = Range::default();
        self.headers.clear();
        self.body = Range::default();
        self.body_len = 0;
        self.buf.clear();
    }

    /// start a new message with given status code and protocol. the reason
    /// phrase is resolved from the status code registry and falls back to
    /// `"Unknown"` for codes outside of it.
    pub fn begin(&mut self, status: u16, protocol: &str) {
        let reason = match status::registered(status) {
            Some(reason) => reason,
            None => {
                debug!(target: "response_encode", "status code {status} not registered. use default reason phrase");
                "Unknown"
            }
        };
        self.begin_with_reason(status, reason, protocol)
    }

    /// start a new message with an explicit reason phrase. previous message
    /// state is discarded. writes `<protocol> <status> <reason>\r\n` and
    /// records the protocol and reason spans.
    pub fn begin_with_reason(&mut self, status: u16, reason: &str, protocol: &str) {
        self.clear();

        self.protocol = self.write(protocol.as_bytes());
        self.write(b" ");

        let mut digits = itoa::Buffer::new();
        self.write(digits.format(status).as_bytes());
        self.status = status;

        self.write(b" ");
        self.reason = self.write(reason.as_bytes());
        self.write(b"\r\n");
    }

    /// append a header line `<name>: <value>\r\n` and record its spans.
    ///
    /// headers keep call order. no de-duplication, case folding or grammar
    /// validation is done. name and value bytes are copied into the cache
    /// buffer, not referenced from the caller. calling this after a body
    /// operation appends past the blank line; the encoder does not detect
    /// such misuse.
    pub fn append_header(&mut self, name: &str, value: &str) {
        let name = self.write(name.as_bytes());
        self.write(b": ");
        let value = self.write(value.as_bytes());
        self.write(b"\r\n");

        self.headers.push(HeaderIndex { name, value });
    }

    /// terminate the header section and buffer the body bytes.
    ///
    /// a non empty body appends a `Content-Length` header first, which takes
    /// its place in call order after all previously appended headers. an empty
    /// body appends no such header. either way the blank line is written.
    pub fn set_body(&mut self, body: &[u8]) {
        if !body.is_empty() {
            let mut digits = itoa::Buffer::new();
            self.append_header("Content-Length", digits.format(body.len()));
        }

        self.write(b"\r\n");

        self.body = self.write(body);
        self.body_len = body.len();
    }

    /// terminate the header section with a declared body length and no body
    /// bytes.
    ///
    /// a `Content-Length: <length>` header is always appended and the blank
    /// line written, but nothing of the body itself enters the cache buffer:
    /// [ResponseEncoder::body] stays empty while
    /// [ResponseEncoder::body_len] reports `length`. the caller transmits the
    /// body bytes out of band and owns matching the declared length.
    pub fn set_body_length(&mut self, length: usize) {
        let mut digits = itoa::Buffer::new();
        self.append_header("Content-Length", digits.format(length));

        self.write(b"\r\n");

        self.body = Range {
            off: self.buf.len(),
            len: 0,
        };
        self.body_len = length;
    }

    pub fn protocol(&self) -> &[u8] {
        self.protocol.resolve(&self.buf)
    }

    pub fn status_code(&self) -> u16 {
        self.status
    }

    pub fn reason(&self) -> &[u8] {
        self.reason.resolve(&self.buf)
    }

    /// view of the i-th appended header as `(name, value)` pair.
    ///
    /// an index at or beyond [ResponseEncoder::header_count] is a caller
    /// contract violation. it asserts in debug build and resolves to a pair of
    /// empty views in release build.
    pub fn header(&self, i: usize) -> (&[u8], &[u8]) {
        debug_assert!(i < self.headers.len(), "header index out of bounds");
        match self.headers.get(i) {
            Some(idx) => (idx.name.resolve(&self.buf), idx.value.resolve(&self.buf)),
            None => (&[], &[]),
        }
    }

    pub fn header_count(&self) -> usize {
        self.headers.len()
    }

    /// iterate header views in call order.
    pub fn headers(&self) -> impl Iterator<Item = (&[u8], &[u8])> {
        self.headers
            .iter()
            .map(|idx| (idx.name.resolve(&self.buf), idx.value.resolve(&self.buf)))
    }

    /// view of the body bytes buffered in cache. empty when the body was
    /// declared through [ResponseEncoder::set_body_length].
    pub fn body(&self) -> &[u8] {
        self.body.resolve(&self.buf)
    }

    /// declared body length. equals `self.body().len()` except for bodies
    /// declared through [ResponseEncoder::set_body_length].
    pub fn body_len(&self) -> usize {
        self.body_len
    }

    /// the whole serialized message as contiguous bytes, ready for transport.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    // append bytes to cache and return the span just written. single point
    // where spans are produced so every recorded span lies inside buffer
    // bounds.
    fn write(&mut self, bytes: &[u8]) -> Range {
        let off = self.buf.len();
        self.buf.extend_from_slice(bytes);
        Range {
            off,
            len: bytes.len(),
        }
    }
}
