//! Decoder for legacy BSD [RFC 3164](https://tools.ietf.org/html/rfc3164) style Syslog
//! datagrams.
//!
//! A datagram is reduced in three steps, each one working on what the previous
//! one left behind:
//!
//!  1. the `<N>` priority marker, split into facility and severity,
//!  2. a `Mmm dd HH:mm:ss` timestamp, in the current year,
//!  3. a hostname, falling back to the address of the sender.
//!
//! Whatever remains is the message body. Decoding never fails, fields that are
//! absent or malformed are simply left unset.
//!
//! # Example
//!
//! A simple syslog server
//!
//! ```no_run
//! use bsd_syslog::Decoder;
//! use std::net::UdpSocket;
//!
//! let s = UdpSocket::bind("127.0.0.1:10514").unwrap();
//! let decoder = Decoder::default();
//! let mut buf = [0u8; 2048];
//! loop {
//!     let (data_read, peer) = s.recv_from(&mut buf).unwrap();
//!     let event = decoder.decode_bytes(buf.to_vec(), data_read, peer.ip());
//!     println!("{:?} {:?} {} {}", event.facility(), event.severity(), event.host(), event.message());
//! }
//! ```

mod config;
mod decoder;
mod error;
mod event;
mod facility;
pub mod hostname;
pub mod priority;
mod raw;
mod severity;
pub mod timestamp;

pub use config::Config;
pub use decoder::Decoder;
pub use error::Error;
pub use event::SyslogEvent;
pub use facility::Facility;
pub use priority::Priority;
pub use raw::RawPayload;
pub use severity::Severity;
