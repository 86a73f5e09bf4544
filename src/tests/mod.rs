// Driver-level tests, run against the simulated panel


#[cfg(test)]
mod flush_tests;

#[cfg(test)]
mod primitive_tests;

#[cfg(test)]
mod property_tests;

#[cfg(test)]
mod text_tests;
