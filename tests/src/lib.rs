#[cfg(test)]
mod util;
#[cfg(test)]
mod zoo;
