//! # ipfilter core
//!
//! The **pipeline** that turns raw input lines into sorted and filtered
//! address listings. It knows nothing about stdin, stdout or the process:
//! callers hand it any [`std::io::BufRead`] and [`std::io::Write`].

pub mod pipeline;
