//! Basic tensor creation and manipulation examples.
//!
//! This example walks through the core functionality of cubit-core:
//! - Creating tensors from explicit dimensions and shape lists
//! - Importing and exporting values in row-major and column-major order
//! - Reshaping, flattening and padding
//! - Random initialization and element-wise transforms
//! - Sharing a tensor between consumers with TensorHandle
//!
//! Run with:
//! ```bash
//! RUST_LOG=cubit_core=debug cargo run --example basic_tensor
//! ```

use anyhow::Result;
use cubit_core::logging::{init_logging, LoggingConfig};
use cubit_core::{FTensor, Order, TensorHandle, U1Tensor};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default())?;

    println!("=== cubit-core: Basic Tensor Examples ===\n");

    example_creation()?;
    example_layout()?;
    example_shape_changes()?;
    example_random()?;
    example_sharing()?;

    println!("\n=== All examples completed successfully! ===");
    Ok(())
}

fn example_creation() -> Result<()> {
    println!("--- Example 1: Tensor Creation ---");

    let explicit = FTensor::new(3, 4, 5);
    println!("new(3, 4, 5)");
    println!("  Shape: {:?}", explicit.shapes()?);
    println!("  Raw shape: {:?}", explicit.raw_shapes()?);

    let matrix = FTensor::from_shape(&[4, 5])?;
    println!("\nfrom_shape(&[4, 5])");
    println!("  Shape: {:?}", matrix.shapes()?);
    println!("  Raw shape: {:?}", matrix.raw_shapes()?);

    let vector = FTensor::new_1d(10);
    println!("\nnew_1d(10)");
    println!("  Shape: {:?}", vector.shapes()?);
    println!("  Size: {}", vector.size()?);

    let empty = FTensor::default();
    println!("\nDefault tensor is empty? {}", empty.is_empty());
    println!("  shapes() -> {}", empty.shapes().unwrap_err());

    println!();
    Ok(())
}

fn example_layout() -> Result<()> {
    println!("--- Example 2: Row-Major and Column-Major Order ---");

    let values: Vec<f32> = (0..6).map(|x| x as f32).collect();
    let tensor = FTensor::from_values(&[2, 3], &values, Order::RowMajor)?;

    println!("Imported 0..6 as a [2, 3] matrix in row-major order");
    println!("  Element at (0, 1, 2): {}", tensor.at(0, 1, 2)?);
    println!("  Row-major export:    {:?}", tensor.values(Order::RowMajor)?);
    println!("  Column-major export: {:?}", tensor.values(Order::ColMajor)?);
    print!("{tensor}");

    println!();
    Ok(())
}

fn example_shape_changes() -> Result<()> {
    println!("--- Example 3: Reshape, Flatten and Padding ---");

    let values: Vec<f32> = (0..24).map(|x| x as f32).collect();
    let mut tensor = FTensor::from_values(&[2, 3, 4], &values, Order::RowMajor)?;

    tensor.reshape(&[4, 6], Order::RowMajor)?;
    println!("After reshape to [4, 6]: shape {:?}", tensor.shapes()?);

    if let Err(err) = tensor.reshape(&[5, 5], Order::RowMajor) {
        println!("Reshape to [5, 5] rejected: {err}");
    }

    tensor.flatten(Order::RowMajor)?;
    println!("After flatten: raw shape {:?}", tensor.raw_shapes()?);

    let mut image = FTensor::new(1, 2, 2);
    image.fill_values(&[1.0, 2.0, 3.0, 4.0], Order::RowMajor)?;
    image.padding(&[1, 1, 1, 1], 0.0)?;
    println!("\nPadded 2x2 image by one on every side:");
    print!("{image}");

    println!();
    Ok(())
}

fn example_random() -> Result<()> {
    println!("--- Example 4: Random Initialization ---");

    let mut weights = FTensor::new(1, 3, 3);
    weights.rand_n(0.0, 0.1)?;
    println!("Normal weights (mean=0.0, std=0.1):");
    println!("  (0, 0, 0): {:.4}", weights.at(0, 0, 0)?);
    println!("  (0, 2, 2): {:.4}", weights.at(0, 2, 2)?);

    let mut mask = U1Tensor::new(1, 2, 4);
    mask.rand_u(0, 1)?;
    println!("\nRandom dropout mask: {:?}", mask.values(Order::RowMajor)?);

    weights.transform(|w| w.max(0.0))?;
    let min = weights
        .values(Order::ColMajor)?
        .into_iter()
        .fold(f32::INFINITY, f32::min);
    println!("\nAfter ReLU transform, min element: {min:.4}");

    // Emits one info event per channel
    weights.show();

    println!();
    Ok(())
}

fn example_sharing() -> Result<()> {
    println!("--- Example 5: Sharing Between Consumers ---");

    let mut output = TensorHandle::new(FTensor::new(1, 2, 2));
    output.make_mut().fill(1.0)?;

    let mut private = output.clone();
    println!("Handles sharing the output: {}", output.handle_count());

    private.make_mut().transform(|x| x * 2.0)?;
    println!("After a private write:");
    println!("  output  (0, 0, 0): {}", output.at(0, 0, 0)?);
    println!("  private (0, 0, 0): {}", private.at(0, 0, 0)?);
    println!("  still shared? {}", output.ptr_eq(&private));

    let view = output.view();
    println!("  view size: {}", view.size()?);

    println!();
    Ok(())
}
