//! Assembly and persistence of the paginated chart document.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use log::info;
use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::aggregate::{aggregate, Aggregate, Statistic};
use crate::chart::{self, ChartFonts, ChartSpec, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
use crate::dataset::Dataset;
use crate::error::ReportError;

/// What one run produced, for logging and assertions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReportSummary {
    /// Number of chart pages in the saved document.
    pub pages: usize,
}

/// Renders the two fixed charts for `dataset` into a single PDF at `output`,
/// overwriting any existing file.
///
/// Chart order is fixed: products sold first, sales earnings second.  An
/// empty aggregate is skipped without emitting a blank page; with an empty
/// dataset the document still finalizes, just with zero pages.
pub fn render_report(dataset: &Dataset, output: &Path) -> Result<ReportSummary, ReportError> {
    let charts: [(ChartSpec, Aggregate); 2] = [
        (
            ChartSpec::products_sold(),
            aggregate(dataset, Statistic::Count),
        ),
        (
            ChartSpec::sales_earnings(),
            aggregate(dataset, Statistic::Sum),
        ),
    ];

    let document = PdfDocument::empty("Sales by State");
    let fonts = ChartFonts {
        regular: document
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|err| ReportError::Pdf(err.to_string()))?,
        bold: document
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|err| ReportError::Pdf(err.to_string()))?,
    };

    let mut pages = 0usize;
    for (spec, aggregate) in &charts {
        if aggregate.is_empty() {
            info!("Skipping empty chart: {}", spec.title);
            continue;
        }
        let (page_index, layer_index) =
            document.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "chart");
        let layer = document.get_page(page_index).get_layer(layer_index);
        chart::draw_chart(&layer, &fonts, spec, aggregate);
        pages += 1;
    }

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(output)?;
    document
        .save(&mut BufWriter::new(file))
        .map_err(|err| ReportError::Pdf(err.to_string()))?;

    info!("Report saved to {} ({pages} pages)", output.display());
    Ok(ReportSummary { pages })
}
