use solana_sdk::native_token::lamports_to_sol;

use crate::estimate::DeployCostEstimate;

/// Renders the cost breakdown in the fixed format downstream scripts grep,
/// comparing the total against the funding budget.
pub fn render_report(estimate: &DeployCostEstimate, budget_sol: f64) -> String {
    let total_sol = lamports_to_sol(estimate.total_lamports());
    format!(
        "Program data rent:   {:.6} SOL (2x {} bytes)\n\
         Config PDA rent:     {:.6} SOL\n\
         Vault ATA rent:      {:.6} SOL\n\
         Transaction fees:    {:.6} SOL (estimate)\n\
         ---\n\
         Total needed:        ~{:.4} SOL\n\
         From {} SOL budget:   ~{:.4} SOL remaining to return\n",
        lamports_to_sol(estimate.rent_programdata),
        estimate.so_size,
        lamports_to_sol(estimate.rent_config),
        lamports_to_sol(estimate.rent_vault),
        lamports_to_sol(estimate.tx_fees),
        total_sol,
        budget_sol,
        budget_sol - total_sol,
    )
}

#[cfg(test)]
mod tests {
    use crate::{
        consts::DEPLOY_BUDGET_SOL,
        estimate::{estimate_deploy_cost, DeployCostParams},
    };

    use super::*;

    #[test]
    fn test_report_for_released_bridge_binary() {
        let estimate = estimate_deploy_cost(&DeployCostParams::default());
        let report = render_report(&estimate, DEPLOY_BUDGET_SOL);
        assert_eq!(
            report,
            "Program data rent:   1.984080 SOL (2x 142448 bytes)\n\
             Config PDA rent:     0.001747 SOL\n\
             Vault ATA rent:      0.002039 SOL\n\
             Transaction fees:    0.000300 SOL (estimate)\n\
             ---\n\
             Total needed:        ~1.9882 SOL\n\
             From 4 SOL budget:   ~2.0118 SOL remaining to return\n"
        );
    }

    #[test]
    fn test_report_is_idempotent() {
        let estimate = estimate_deploy_cost(&DeployCostParams::default());
        assert_eq!(
            render_report(&estimate, DEPLOY_BUDGET_SOL),
            render_report(&estimate, DEPLOY_BUDGET_SOL)
        );
    }

    #[test]
    fn test_remaining_is_budget_minus_total() {
        let estimate = estimate_deploy_cost(&DeployCostParams::default());
        let report = render_report(&estimate, DEPLOY_BUDGET_SOL);
        let remaining = format!(
            "~{:.4} SOL remaining",
            DEPLOY_BUDGET_SOL - lamports_to_sol(estimate.total_lamports())
        );
        assert!(report.contains(&remaining));
    }

    #[test]
    fn test_report_with_custom_budget() {
        let estimate = estimate_deploy_cost(&DeployCostParams::default());
        let report = render_report(&estimate, 2.5);
        assert!(report.contains("From 2.5 SOL budget:"));
        assert!(report.contains("~0.5118 SOL remaining to return"));
    }

    #[test]
    fn test_line_order_is_fixed() {
        let params = DeployCostParams {
            so_size: 1,
            deploy_tx_count: 1,
        };
        let estimate = estimate_deploy_cost(&params);
        let report = render_report(&estimate, DEPLOY_BUDGET_SOL);
        let labels: Vec<_> = report
            .lines()
            .map(|line| line.split(':').next().unwrap())
            .collect();
        assert_eq!(
            labels,
            [
                "Program data rent",
                "Config PDA rent",
                "Vault ATA rent",
                "Transaction fees",
                "---",
                "Total needed",
                "From 4 SOL budget"
            ]
        );
    }
}
