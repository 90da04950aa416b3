use crate::*;

pub fn handle_compare_commands(cli: &Cli, catalog: &Catalog) -> anyhow::Result<bool> {
    let Commands::Compare { command } = &cli.command else {
        return Ok(false);
    };

    let mut session = CompareSession::new(catalog);

    match command {
        CompareCommands::Subjects => {
            let mut rows = Vec::new();
            for s in session.subjects() {
                rows.push(SubjectInfo {
                    key: s.key.clone(),
                    label: s.label.clone(),
                    overall: session.overall_score(&s.key)?,
                });
            }
            print_out(cli.json, &rows, |s| {
                format!("{}\t{}\t{}", s.key, s.label, s.overall)
            })?;
        }
        CompareCommands::Chart { all, select } => {
            if *all {
                session.select_all();
            }
            for key in select {
                session.toggle_selection(key)?;
            }
            let report = ChartReport {
                selection: session.selection().to_vec(),
                rows: session.chart_rows()?,
            };
            if cli.json {
                print_json(report)?;
            } else {
                for row in &report.rows {
                    let cells: Vec<String> = row
                        .cells
                        .iter()
                        .map(|c| format!("{}={}", c.subject, c.percent))
                        .collect();
                    println!("{}\t{}", row.metric, cells.join("\t"));
                }
            }
        }
        CompareCommands::Score { subjects, weight } => {
            for raw in weight {
                let (metric, value) = parse_weight_arg(raw)?;
                session.set_weight(&metric, value)?;
            }
            let keys: Vec<String> = if subjects.is_empty() {
                session.subjects().iter().map(|s| s.key.clone()).collect()
            } else {
                subjects.clone()
            };
            let mut cards = Vec::new();
            for key in &keys {
                cards.push(session.score_card(key)?);
            }
            let report = ScoreReport {
                weights: session.weights(),
                cards,
            };
            if cli.json {
                print_json(report)?;
            } else {
                for card in &report.cards {
                    println!(
                        "{}\t{}\toverall={}\tweighted={}",
                        card.subject, card.label, card.overall, card.weighted_overall
                    );
                }
            }
        }
    }

    Ok(true)
}

pub fn parse_weight_arg(raw: &str) -> anyhow::Result<(String, f64)> {
    let parts: Vec<&str> = raw.splitn(2, '=').collect();
    if parts.len() != 2 || parts[0].is_empty() {
        anyhow::bail!("invalid weight (expected METRIC=VALUE): {}", raw);
    }
    let value: f64 = match parts[1].parse() {
        Ok(v) => v,
        Err(_) => anyhow::bail!("invalid weight value: {}", raw),
    };
    // infinities are merely out of range and clamp like any other value
    if value.is_nan() {
        anyhow::bail!("invalid weight value: {}", raw);
    }
    Ok((parts[0].to_string(), value))
}
