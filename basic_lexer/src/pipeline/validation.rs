/// Validate that the pipeline is properly configured
pub fn validate_pipeline() -> Result<(), String> {
    crate::log_debug!("Validating pipeline configuration");

    crate::logging::config::validate_config()?;
    crate::lexical::validate_error_codes()?;

    crate::log_success!(
        crate::logging::codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Pipeline validation succeeded",
        "stages_validated" => 2,
        "lexical_analysis" => true,
        "type_inference" => true
    );

    Ok(())
}
