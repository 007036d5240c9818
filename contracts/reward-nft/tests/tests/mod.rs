
mod test_boost;
mod test_burn;
