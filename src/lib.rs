//! # CloudFront redirect
//!
//! A small HTTP handler that answers every request with a `302 Found`
//! redirect to a time-limited, signed CloudFront url for the requested path.
//!
//! ## Flow
//!
//! The request path is taken verbatim as the object key and appended to the
//! distribution domain. The resulting url is signed with a canned policy
//! that expires 90 minutes after the invocation, and the client is sent to
//! the signed url.
//!
//! ## Design
//!
//! - [`config::SigningConfig`]: key material, key pair id and distribution
//! domain, read from the environment at startup.
//! - [`signer::UrlSigner`]: turns a url and an expiry into a signed url. The
//! CloudFront implementation is [`signer::CloudFrontUrlSigner`].
//! - [`handler::handle`]: the request/response contract, independent of the
//! transport. [`router::build_redirect_router`] exposes it as an axum router
//! that runs under AWS Lambda or a plain listener.
//!

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod extract;
pub mod handler;
pub mod response;
pub mod router;
pub mod signer;
pub mod state;
