/// Plain-text rendering of a [`DashboardView`].
use crate::format::{format_count, format_share};
use crate::view::{BarChart, DashboardView};
use roadsign_core::analysis::RouteRanking;
use std::fmt::Write;

/// Widest bar drawn for the largest count.
const BAR_WIDTH: u64 = 30;

/// Render a page as text for terminals and logs.
pub fn render(view: &DashboardView) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    write_view(&mut out, view).ok();
    out
}

fn write_view(out: &mut String, view: &DashboardView) -> std::fmt::Result {
    writeln!(out, "== {} ==", view.heading)?;
    writeln!(out, "Total de Sinalizações: {}", format_count(view.total))?;
    if view.skipped_rows > 0 {
        writeln!(out, "Linhas ignoradas na carga: {}", format_count(view.skipped_rows as u64))?;
    }
    if view.is_empty() {
        writeln!(out, "Nenhuma sinalização para os filtros selecionados.")?;
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "{}", view.pie_title)?;
    for slice in &view.pie {
        writeln!(
            out,
            "  {:<14} {:>8}  {:>6}",
            slice.label,
            format_count(slice.count),
            format_share(slice.share)
        )?;
    }

    write_bars(out, &view.type_bars)?;
    write_bars(out, &view.secondary_bars)?;

    if let Some(map) = &view.map {
        writeln!(out)?;
        writeln!(out, "{}: {} elementos", map.title, format_count(map.overlays.len() as u64))?;
    }

    writeln!(out)?;
    let limit = view.ranking_limit;
    write_ranking(out, &format!("{limit} Melhores Rodovias"), &view.best_routes)?;
    write_ranking(out, &format!("{limit} Piores Rodovias"), &view.worst_routes)?;
    Ok(())
}

fn write_bars(out: &mut String, chart: &BarChart) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "{}", chart.title)?;
    let max = chart.bars.iter().map(|b| b.count).max().unwrap_or(0);
    for bar in &chart.bars {
        let width = if max > 0 {
            (bar.count * BAR_WIDTH).div_ceil(max)
        } else {
            0
        };
        writeln!(
            out,
            "  {:<24} {:>8} {}",
            bar.label,
            format_count(bar.count),
            "#".repeat(width as usize)
        )?;
    }
    Ok(())
}

fn write_ranking(out: &mut String, title: &str, routes: &[RouteRanking]) -> std::fmt::Result {
    writeln!(out, "{title}")?;
    writeln!(out, "  {:<8} {:>8} {:>8}", "rodovia", "boas", "ruins")?;
    for r in routes {
        writeln!(
            out,
            "  {:<8} {:>8} {:>8}",
            r.route.as_str(),
            format_count(r.good),
            format_count(r.bad)
        )?;
    }
    Ok(())
}
