fn main() -> Result<(), reprgen_generator::GenerateError> {
    reprgen_generator::configure().generate()?;
    Ok(())
}
