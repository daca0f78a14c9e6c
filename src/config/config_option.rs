/// A configurable value, together with its name and bounds.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: PartialOrd + std::fmt::Display> ConfigOption<T> {
    /// Sets the value of the option, if within bounds.
    ///
    /// Otherwise, a message noting the bounds is returned.
    pub fn set(&mut self, value: T) -> Result<(), String> {
        match self.min <= value && value <= self.max {
            true => {
                self.value = value;
                Ok(())
            }
            false => Err(format!(
                "{} requires a value between {} and {}",
                self.name, self.min, self.max
            )),
        }
    }
}
