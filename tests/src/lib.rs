//! End-to-end sweeps driven through a scripted probe mechanism.

#[cfg(test)]
mod fake;
#[cfg(test)]
mod sweep;
