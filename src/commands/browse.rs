use crate::*;

pub fn handle_browse_commands(cli: &Cli, catalog: &Catalog) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Posts { query, tag } => {
            let posts = listing(&catalog.posts, query.as_deref().unwrap_or(""), tag);
            let rows: Vec<PostSummary> = posts
                .iter()
                .map(|p| PostSummary {
                    id: p.id.clone(),
                    title: p.title.clone(),
                    excerpt: p.excerpt.clone(),
                    tags: p.tags.clone(),
                    date: p.date,
                    read_minutes: p.read_minutes,
                })
                .collect();
            print_out(cli.json, &rows, |p| {
                format!("{}\t{}\t{}", p.date, p.id, p.title)
            })?;
        }
        Commands::Show { post } => {
            let p = find_post(catalog, post)?;
            if cli.json {
                print_json(p)?;
            } else {
                println!("id: {}", p.id);
                println!("title: {}", p.title);
                println!("date: {}", p.date);
                println!("read_minutes: {}", p.read_minutes);
                println!("tags: {}", p.tags.join(", "));
                println!();
                println!("{}", p.body);
            }
        }
        Commands::Tags => {
            print_out(cli.json, &catalog.tags, |t| t.to_string())?;
        }
        Commands::Validate => {
            // startup already ran the checks; reaching this arm means they passed
            print_one(cli.json, "valid", |_| "catalog valid".to_string())?;
        }
        Commands::Compare { .. } => {
            unreachable!("handled before browse dispatch")
        }
    }

    Ok(())
}
