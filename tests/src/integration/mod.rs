//! Integration flows across subsystems.

#[cfg(test)]
pub mod fixtures;

#[cfg(test)]
mod flows;
#[cfg(test)]
mod http;
