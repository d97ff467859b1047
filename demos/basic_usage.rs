// ============================================================================
// Basic Usage Example
// ============================================================================

use linear_algebra::prelude::*;

fn main() -> Result<(), NumericError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt::init();

    println!("=== Linear Algebra Example ===\n");

    let config = NumericConfig::display(3);
    config.validate()?;

    let a = realvec![1, 2, 3]?;
    let b = realvec![4, 5, 6]?;
    let two = RealNumber::approximate(2.into());

    println!("a = {}", config.format_vector(&a));
    println!("b = {}", config.format_vector(&b));

    println!("\n=== Element-wise ===");
    println!("a + b = {}", config.format_vector(&a.checked_add(&b)?));
    println!("a - b = {}", config.format_vector(&a.checked_sub(&b)?));
    println!("a * 2 = {}", config.format_vector(&a.checked_mul_scalar(two)?));
    println!("a / 2 = {}", config.format_vector(&a.checked_div_scalar(two)?));

    println!("\n=== Products ===");
    println!("|a|   = {}", config.format(a.norm()?));
    println!("a^    = {}", config.format_vector(&a.normalize()?));
    println!("a . b = {}", config.format(a.dot(&b)?));
    println!("a x b = {}", config.format_vector(&a.cross(&b)?));
    println!("angle = {} rad", config.format(a.angle(&b)?));

    println!("\n=== Exact Fractions ===");
    let third = RealNumber::fraction(1, 3)?;
    let sum = third.checked_add(third)?;
    println!("1/3 + 1/3 = {}", sum);
    println!("simplified = {}", sum.simplify()?);
    println!("approximately {}", config.format(sum.as_approximate()?));

    let exact = RealVector::from_integers([1, 2, 2]);
    println!("|{}| = {}", exact, exact.norm()?);

    println!("\n=== Errors ===");
    match a.cross(&realvec![1, 2]?) {
        Ok(v) => println!("unexpected: {}", v),
        Err(err) => println!("cross of mismatched vectors: {}", err),
    }
    match RealVector::zeros(3).normalize() {
        Ok(v) => println!("unexpected: {}", v),
        Err(err) => println!("normalizing the zero vector: {}", err),
    }

    Ok(())
}
