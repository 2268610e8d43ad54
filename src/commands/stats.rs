use super::Session;
use crate::libs::error::StatsError;
use crate::libs::formatter::format_money;
use crate::libs::messages::Message;
use crate::libs::stats::SalaryStats;
use crate::{msg_error, msg_print};
use anyhow::Result;
use tracing::warn;

pub fn cmd(session: &mut Session) -> Result<()> {
    msg_print!(Message::StatisticsHeader, true);

    let count = match session.employees.count() {
        Ok(count) => count,
        Err(e) => {
            msg_error!(Message::StatisticsFailed(e.to_string()));
            return Ok(());
        }
    };
    msg_print!(Message::TotalEmployees(count));
    if count == 0 {
        return Ok(());
    }

    let employees = match session.employees.get_all() {
        Ok(employees) => employees,
        Err(e) => {
            msg_error!(Message::StatisticsFailed(e.to_string()));
            return Ok(());
        }
    };

    match SalaryStats::compute(&employees) {
        Ok(stats) => {
            msg_print!(Message::AverageSalary(format_money(&stats.average)));
            msg_print!(Message::HighestSalary(format_money(&stats.highest)));
            msg_print!(Message::LowestSalary(format_money(&stats.lowest)));
        }
        // Rows may vanish between the count and the listing.
        Err(StatsError::Empty) => {}
        Err(e) => {
            warn!("statistics over {} employees failed: {}", employees.len(), e);
            msg_error!(Message::StatisticsFailed(e.to_string()));
        }
    }

    Ok(())
}
