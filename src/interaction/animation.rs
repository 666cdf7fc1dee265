/// Receiver for animator parameters keyed by name.
pub trait AnimationSink {
    fn set_bool(&mut self, name: &str, value: bool);
    fn set_trigger(&mut self, name: &str);
}
