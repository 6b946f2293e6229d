//! Static screen text and the engine menu

use crate::catalog::EngineCatalog;
use std::io::{self, Write};

pub const INTRO_TEXT: &str = "\
When building a database using Amazon RDS you need to define the server
instance type, the type of storage, and the amount of storage. These work
together to provide the best performance at the least cost. If you don't
understand how these work with each other, you run the risk of creating
performance bottlenecks, or buying too much of the wrong resources.
You will do the best job of balancing cost and performance if you can provide
accurate information about several key factors.
At a minimum you will need to know the following:
\t1. Which RDS database you plan to use
\t\t(Aurora, MariaDB, Microsoft SQL, MySQL, Oracle, or PostgreSQL)
\t2. The type of storage you plan to use (gp2 or io1).
\t3. The database page size in KB.
\t4. The desired IOPS (Input/output Operations Per Second).

Accurate data in the above areas will help you make the best choices regarding
how much disk space you need and which DB instance to choose.
";

pub const INTRO_PROMPT: &str = "\nPress <ENTER> when ready to begin or \"Q\" to exit: ";
pub const CONTINUE_PROMPT: &str = "Press <ENTER> to continue.";
pub const ENGINE_QUESTION: &str = "Which RDS service are you planning to use?\n";
pub const STORAGE_PROMPT: &str = "What type of storage will your DB use? (1 = gp2, 2 = io1): ";
pub const IOPS_PROMPT: &str = "What is the desired IOPS?: ";

pub fn engine_prompt(catalog: &EngineCatalog) -> String {
    format!("Please enter a number between 1 and {}: ", catalog.len())
}

pub fn page_size_prompt(default_kb: u32) -> String {
    format!("What is the database page size in KB (default {}): ", default_kb)
}

/// List engines as `n: Name`, one per line, in menu order.
pub fn render_engine_menu<W: Write>(out: &mut W, catalog: &EngineCatalog) -> io::Result<()> {
    writeln!(out, "{}", ENGINE_QUESTION)?;
    for profile in catalog.iter() {
        writeln!(out, "{}: {}", profile.menu_number, profile.display_name)?;
    }
    Ok(())
}

/// Catalog table used by the `engines` subcommand
pub fn render_catalog_table<W: Write>(out: &mut W, catalog: &EngineCatalog) -> io::Result<()> {
    writeln!(
        out,
        "{:<4} {:<12} {:<22} {:>10} {:>14}",
        "#", "ID", "ENGINE", "PAGE (KB)", "MAX IO1 IOPS"
    )?;
    for p in catalog.iter() {
        writeln!(
            out,
            "{:<4} {:<12} {:<22} {:>10} {:>14}",
            p.menu_number,
            p.id.to_string(),
            p.display_name,
            p.default_page_size_kb,
            p.max_provisioned_iops
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_menu_lists_all_engines_in_order() {
        let mut buf = Vec::new();
        render_engine_menu(&mut buf, EngineCatalog::standard()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let aurora = text.find("1: Amazon Aurora").unwrap();
        let mssql = text.find("3: Microsoft SQL Server").unwrap();
        let pg = text.find("6: PostgreSQL").unwrap();
        assert!(aurora < mssql && mssql < pg);
    }

    #[test]
    fn test_catalog_table() {
        let mut buf = Vec::new();
        render_catalog_table(&mut buf, EngineCatalog::standard()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 7);
        assert!(text.contains("sqlserver"));
        assert!(text.contains("32000"));
    }

    #[test]
    fn test_page_size_prompt_shows_default() {
        assert_eq!(
            page_size_prompt(8),
            "What is the database page size in KB (default 8): "
        );
    }
}
