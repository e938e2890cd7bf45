//! Composable validation pipelines.
//!
//! A [`Schema`] is an ordered chain of transforms (normalize the value)
//! followed by an ordered chain of assertions (check the normalized value).
//! Schemas are built fluently and applied to one input at a time:
//!
//! ```
//! use mcpgen::core::Schema;
//!
//! let mut schema = Schema::new();
//! schema
//!     .transform(|v: String| v.trim().to_string())
//!     .assert_that(|v| !v.is_empty());
//!
//! assert!(schema.validate("  hello  ".to_string()));
//! assert!(!schema.validate("   ".to_string()));
//! ```

/// A transform step: maps a value to a (possibly reshaped) value.
type Transform<T> = Box<dyn Fn(T) -> T>;

/// An assertion step: checks the normalized value against a rule.
type Assertion<T> = Box<dyn Fn(&T) -> bool>;

/// An ordered validation pipeline over values of type `T`.
///
/// Steps run in append order. All transforms resolve the final value
/// before any assertion is evaluated, so every assertion sees the fully
/// normalized value. The first failing assertion short-circuits the rest.
///
/// The engine itself never catches step failures: a panicking transform
/// or assertion propagates to the caller of [`Schema::validate`].
pub struct Schema<T> {
    transforms: Vec<Transform<T>>,
    assertions: Vec<Assertion<T>>,
}

impl<T> Schema<T> {
    /// Create an empty schema.
    ///
    /// With no steps recorded, `validate` is the identity over an empty
    /// transform chain and vacuously true over an empty assertion chain.
    pub fn new() -> Self {
        Self {
            transforms: Vec::new(),
            assertions: Vec::new(),
        }
    }

    /// Append a transform step; returns the schema for fluent chaining.
    pub fn transform(&mut self, f: impl Fn(T) -> T + 'static) -> &mut Self {
        self.transforms.push(Box::new(f));
        self
    }

    /// Append an assertion step; returns the schema for fluent chaining.
    pub fn assert_that(&mut self, check: impl Fn(&T) -> bool + 'static) -> &mut Self {
        self.assertions.push(Box::new(check));
        self
    }

    /// Run the pipeline against a single input.
    ///
    /// Applies every transform in append order, then evaluates assertions
    /// in append order, returning `false` on the first failure (remaining
    /// assertions are not invoked). Never mutates the recorded steps, so a
    /// schema can be reused across any number of inputs.
    pub fn validate(&self, input: T) -> bool {
        let mut value = input;
        for transform in &self.transforms {
            value = transform(value);
        }
        for check in &self.assertions {
            if !check(&value) {
                return false;
            }
        }
        true
    }

    /// Number of recorded transform steps.
    pub fn transform_count(&self) -> usize {
        self.transforms.len()
    }

    /// Number of recorded assertion steps.
    pub fn assertion_count(&self) -> usize {
        self.assertions.len()
    }
}

impl<T> Default for Schema<T> {
    fn default() -> Self {
        Self::new()
    }
}
