use crate::api::ApiClient;
use crate::error::Result;
use crate::format::format_number;

pub fn list_languages(client: &ApiClient) -> Result<()> {
    let languages = client.languages()?;

    if languages.is_empty() {
        println!("No languages indexed yet.");
        return Ok(());
    }

    println!("Indexed languages:\n");
    for entry in &languages {
        println!("  {:<20} {} repos", entry.language, entry.repo_count);
    }
    Ok(())
}

pub fn show_stats(client: &ApiClient) -> Result<()> {
    let stats = client.stats()?;

    println!("\n{}", "=".repeat(60));
    println!("PLATFORM STATS");
    println!("{}", "=".repeat(60));
    println!("Repositories:          {}", format_number(stats.total_repositories));
    println!("Open good first issues: {}", format_number(stats.total_open_issues));
    println!("Languages:             {}", stats.total_languages);
    println!("Stars tracked:         {}", format_number(stats.total_stars_tracked));
    println!("Avg activity:          {:.1}", stats.avg_activity_score);
    println!("Avg friendliness:      {:.1}", stats.avg_beginner_friendliness_score);
    Ok(())
}
