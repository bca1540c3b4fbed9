//! News reading client and API proxy.
//!
//! Two cooperating pieces: an HTTP proxy ([`routes`], [`handlers`]) that
//! holds the headlines-provider and generative-model credentials server-side,
//! and a feed client library ([`client`]) that drives pagination, article
//! detail, and follow-up Q&A against it.

pub mod client;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod utils;
