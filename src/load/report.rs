//! Text report of a workshop result.

use std::fmt;

use super::aggregate::WorkshopResult;

impl fmt::Display for WorkshopResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let g = &self.group;
        let b = &self.busbar;
        writeln!(f, "--- Equipment group ---")?;
        writeln!(f, "Utilization rate Kv:      {:.4}", g.group_utilization_rate)?;
        writeln!(f, "Effective count ne:       {:.2}", g.effective_equipment_count)?;
        writeln!(f, "Active-power factor Kr:   {:.2}", g.estimated_active_power_factor)?;
        writeln!(f, "Active load Pr:           {:.2}", g.estimated_active_load)?;
        writeln!(f, "Reactive load Qr:         {:.2}", g.estimated_reactive_load)?;
        writeln!(f, "Full power Sr:            {:.2}", g.full_power)?;
        writeln!(f, "Group current Ir:         {:.2}", g.estimated_group_current)?;
        writeln!(f)?;
        writeln!(f, "--- Workshop, 0.38 kV busbars ---")?;
        writeln!(f, "Utilization rate Kv:      {:.2}", b.utilization_rate_all)?;
        writeln!(f, "Effective count ne:       {}", b.effective_equipment_count_all)?;
        writeln!(f, "Active-power factor Kr:   {:.2}", b.estimated_active_power_factor_all)?;
        writeln!(f, "Active load Pr:           {:.2}", b.estimated_active_load_tires)?;
        writeln!(f, "Reactive load Qr:         {:.2}", b.estimated_reactive_load_tires)?;
        writeln!(f, "Full power Sr:            {:.2}", b.full_power_tires)?;
        write!(f, "Group current Ir:         {:.2}", b.estimated_group_current_tires)
    }
}

#[cfg(test)]
mod tests {
    use crate::load::{WorkshopTotals, calculate_workshop_results};

    #[test]
    fn report_lists_both_views() {
        let result = calculate_workshop_results(&[], &WorkshopTotals::REFERENCE);
        let text = result.to_string();
        assert!(text.contains("--- Equipment group ---"));
        assert!(text.contains("--- Workshop, 0.38 kV busbars ---"));
        assert!(text.contains("Effective count ne:       56"));
        assert!(text.contains("Active load Pr:           526.40"));
    }
}
