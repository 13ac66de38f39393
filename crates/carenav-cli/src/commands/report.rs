use std::sync::Arc;

use anyhow::Result;
use carenav_application::ClientFactory;
use carenav_core::report::ReportForm;
use carenav_infrastructure::ConfigService;

use super::view::PlainView;

pub async fn run(
    config: &ConfigService,
    district: &str,
    year_from: i32,
    year_to: i32,
    refine: Option<&str>,
) -> Result<()> {
    let factory = ClientFactory::new(config.load()?);
    let report = factory.create_report(Arc::new(PlainView))?;

    let form = ReportForm::new(district, Some(year_from), Some(year_to));
    report.generate(&form).await?;

    if let Some(instruction) = refine {
        report.refine(instruction).await?;
    }

    Ok(())
}
