use core::{fmt, future::Future};

/// A capability that performs one remote request for a target.
///
/// The dispatcher never talks to the network itself; it drives whatever
/// implementation of this trait it is handed. Implementations must be
/// shareable across worker tasks, hence the `Send + Sync + 'static` bound.
///
/// Returning `Err` means the request never produced a response at all
/// (connection refused, DNS failure, ...). A response with an unsuccessful
/// status is still `Ok`; the dispatcher inspects
/// [`FetchResponse::is_success`] itself.
pub trait Fetch: Send + Sync + 'static {
    /// The response type produced on a completed request.
    type Response: FetchResponse;

    /// The transport failure type.
    type Error: fmt::Display + Send;

    /// Issues a single request for `target`.
    fn fetch(
        &self,
        target: &str,
    ) -> impl Future<Output = Result<Self::Response, Self::Error>> + Send;
}

/// A completed response that can report its status and decode its body.
pub trait FetchResponse: Send {
    /// The decoded body.
    type Payload: Send + 'static;

    /// The body decoding failure type.
    type Error: fmt::Display + Send;

    /// Returns `true` when the status indicates success (2xx for HTTP).
    fn is_success(&self) -> bool;

    /// The numeric status code.
    fn status(&self) -> u16;

    /// Consumes the response and decodes its body.
    fn decode(self) -> impl Future<Output = Result<Self::Payload, Self::Error>> + Send;
}

/// The decoded payload type produced by a [`Fetch`] implementation.
pub type Payload<F> = <<F as Fetch>::Response as FetchResponse>::Payload;
