pub trait SlugGenerator: Send + Sync {
    /// Lowercase, hyphen separated, no whitespace. May return an empty string
    /// when the input has nothing sluggable in it.
    fn slugify(&self, input: &str) -> String;
}
