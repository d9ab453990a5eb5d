use crate::types::report::{AdvisorReport, MentoringPlan};

pub fn to_markdown(report: &AdvisorReport) -> String {
    let mut output = String::new();
    let metrics = &report.metrics;
    output.push_str("# Student Performance Report\n\n");
    output.push_str(&format!(
        "Predicted score: {:.0}% ({})\n\n",
        metrics.predicted_score, metrics.tier
    ));

    output.push_str("## Metrics\n\n");
    output.push_str(&format!(
        "- predicted score: {:.1} ({:+.0} vs previous)\n- performance: {}\n- growth potential: +{:.0} points\n- efficiency: {:.1}/10\n- scorer: {}\n\n",
        metrics.predicted_score,
        metrics.delta_vs_previous,
        metrics.tier,
        metrics.growth_potential,
        metrics.efficiency,
        report.prediction.scorer
    ));

    output.push_str("## Action Plan\n\n");
    if report.recommendations.is_empty() {
        output.push_str("- Perfect routine! You're already optimized for success.\n\n");
    } else {
        for recommendation in &report.recommendations {
            output.push_str(&format!(
                "### [{}] {}\n\n{}\n\n- action: {}\n- impact: {}\n\n",
                recommendation.priority,
                recommendation.category,
                recommendation.message,
                recommendation.action,
                recommendation.impact
            ));
        }
    }

    output.push_str("## Insights\n\n");
    if report.insights.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for insight in &report.insights {
            output.push_str(&format!("- {}: {}\n", insight.category, insight.message));
        }
        output.push('\n');
    }

    output.push_str(&plan_section(&report.mentoring_plan));

    if !report.artifacts.is_empty() {
        output.push_str("\n## Model Artifacts\n\n");
        for artifact in &report.artifacts {
            output.push_str(&format!("- {} (sha256 {})\n", artifact.path, artifact.sha256));
        }
    }

    output
}

pub fn plan_section(plan: &MentoringPlan) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "## {}-Day Mentoring Plan\n\nTarget score: {:.0}%\n\n",
        plan.horizon_days, plan.target_score
    ));
    if !plan.focus_areas.is_empty() {
        output.push_str(&format!("Focus areas: {}\n\n", plan.focus_areas.join(", ")));
    }
    for (index, step) in plan.steps.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", index + 1, step));
    }
    output.push_str(&format!("\n_{}_\n", plan.motto));
    output
}
