//! .

mod cli;
mod populate;


#[cfg(test)]
pub(super) fn words(w: &[&str]) -> Vec<String> {
    w.iter().map(|s| s.to_string()).collect()
}
