//! InPlan console client
//!
//! Drives the banking and IRP rebalancing flows against a configured
//! backend from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Account overview for one user
//! cargo run --bin inplan -- accounts 1001
//!
//! # Current IRP holdings and the similar-user recommendation
//! cargo run --bin inplan -- portfolio 1001
//! cargo run --bin inplan -- recommend 1001
//!
//! # Rebalancing: simulate (recommended or custom weights), then approve
//! cargo run --bin inplan -- simulate 1001
//! cargo run --bin inplan -- simulate 1001 10 40 50
//! cargo run --bin inplan -- approve 42
//! cargo run --bin inplan -- status 42
//!
//! # Transaction history for one account
//! cargo run --bin inplan -- history 11
//! ```
//!
//! # Environment Variables
//!
//! * `INPLAN_BASE_URL` - Banking/IRP gateway base URL (default: http://localhost:8080/api)
//! * `INPLAN_INSURANCE_BASE_URL` - Insurance service base URL
//! * `INPLAN_TIMEOUT_SECS` - Request timeout in seconds (default: 30)
//! * `INPLAN_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use client_api::dto::banking::TransactionHistoryQuery;
use client_api::{BankingClient, ClientConfig, HttpClient, InsuranceClient, RebalancingClient};
use core_kernel::{today_kst, AccountId, CustomerId, JobId, Money, UserId};
use domain_banking::{bank_for_account_number, TransactionFilter};
use domain_portfolio::{
    allocation_slices, OrderFlowSummary, PortfolioWeights, RebalancingJob, RebalancingSession,
    SimulationKind,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = load_config();
    init_tracing(&config.log_level);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        print_usage();
        return Ok(());
    };

    let http = HttpClient::new(config.base_url.clone(), config.timeout())?;
    let banking = BankingClient::new(http.clone());
    let rebalancing = RebalancingClient::new(http);
    let insurance = InsuranceClient::new(HttpClient::new(
        config.insurance_base_url.clone(),
        config.timeout(),
    )?);

    match command.as_str() {
        "accounts" => {
            let user_id: UserId = parse_arg(&args, 1, "userId")?;
            show_accounts(&banking, user_id).await?;
        }
        "portfolio" => {
            let customer_id: CustomerId = parse_arg(&args, 1, "customerId")?;
            show_portfolio(&rebalancing, customer_id).await?;
        }
        "recommend" => {
            let customer_id: CustomerId = parse_arg(&args, 1, "customerId")?;
            show_recommendation(&rebalancing, customer_id).await?;
        }
        "simulate" => {
            let customer_id: CustomerId = parse_arg(&args, 1, "customerId")?;
            let weights = parse_weights(&args)?;
            run_simulation(rebalancing, customer_id, weights).await?;
        }
        "approve" => {
            let job_id: JobId = parse_arg(&args, 1, "jobId")?;
            let job = rebalancing.approve(job_id).await?;
            print_job(&job);
        }
        "status" => {
            let job_id: JobId = parse_arg(&args, 1, "jobId")?;
            let job = rebalancing.status(job_id).await?;
            print_job(&job);
        }
        "history" => {
            let account_id: AccountId = parse_arg(&args, 1, "accountId")?;
            show_history(&banking, account_id).await?;
        }
        "products" => {
            let category = args.get(1).map(|s| s.as_str());
            show_products(&insurance, category).await?;
        }
        other => {
            print_usage();
            bail!("unknown command: {other}");
        }
    }

    Ok(())
}

fn print_usage() {
    eprintln!(
        "usage: inplan <command> [args]\n\
         commands:\n\
         \x20 accounts  <userId>\n\
         \x20 portfolio <customerId>\n\
         \x20 recommend <customerId>\n\
         \x20 simulate  <customerId> [cash deposit fund]\n\
         \x20 approve   <jobId>\n\
         \x20 status    <jobId>\n\
         \x20 history   <accountId>\n\
         \x20 products  [category]"
    );
}

fn parse_arg<T: std::str::FromStr>(args: &[String], index: usize, name: &str) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    args.get(index)
        .with_context(|| format!("missing argument: {name}"))?
        .parse::<T>()
        .with_context(|| format!("invalid {name}"))
}

fn parse_weights(args: &[String]) -> Result<Option<PortfolioWeights>> {
    if args.len() < 3 {
        return Ok(None);
    }
    let cash: Decimal = parse_arg(args, 2, "cash weight")?;
    let deposit: Decimal = parse_arg(args, 3, "deposit weight")?;
    let fund: Decimal = parse_arg(args, 4, "fund weight")?;
    Ok(Some(PortfolioWeights::new(cash, deposit, fund)))
}

/// Loads configuration from environment with per-variable fallbacks
fn load_config() -> ClientConfig {
    ClientConfig::from_env().unwrap_or_else(|_| {
        let defaults = ClientConfig::default();
        ClientConfig {
            base_url: std::env::var("INPLAN_BASE_URL").unwrap_or(defaults.base_url),
            insurance_base_url: std::env::var("INPLAN_INSURANCE_BASE_URL")
                .unwrap_or(defaults.insurance_base_url),
            timeout_secs: std::env::var("INPLAN_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.timeout_secs),
            log_level: std::env::var("INPLAN_LOG_LEVEL")
                .or_else(|_| std::env::var("RUST_LOG"))
                .unwrap_or(defaults.log_level),
        }
    })
}

/// Initializes the tracing subscriber for structured logging
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

async fn show_accounts(banking: &BankingClient, user_id: UserId) -> Result<()> {
    let overview = banking.all_accounts(user_id).await?;

    println!("== 계좌 현황 ==");
    for account in &overview.banking_accounts {
        let bank = bank_for_account_number(&account.account_number)
            .map(|b| b.name)
            .unwrap_or("-");
        println!(
            "  [{}] {} {} ({}) 잔액 {}",
            account.account_id,
            bank,
            account.account_number,
            account.kind.label(),
            account.balance_money()
        );
    }
    if let Some(irp) = &overview.irp_account {
        println!(
            "  [IRP] {} 평가액 {}",
            irp.account_number,
            Money::won_decimal(irp.current_balance)
        );
    }
    println!(
        "총 자산 {} (은행 {} / IRP {})",
        Money::won_decimal(overview.total_balance),
        Money::won_decimal(overview.total_banking_balance),
        Money::won_decimal(overview.total_irp_balance)
    );
    Ok(())
}

async fn show_portfolio(rebalancing: &RebalancingClient, customer_id: CustomerId) -> Result<()> {
    let portfolio = rebalancing.portfolio(customer_id).await?;

    println!("== IRP 포트폴리오 ({}) ==", portfolio.irp_account_number);
    println!("총 평가액 {}", Money::won_decimal(portfolio.total_value));
    println!(
        "현금 {}% / 예금 {}% / 펀드 {}%",
        portfolio.cash_weight, portfolio.deposit_weight, portfolio.fund_weight
    );
    for holding in &portfolio.holdings {
        println!(
            "  {} {} ({}) 평가액 {}",
            holding.asset_code,
            holding.asset_name,
            holding.asset_type.label(),
            Money::won_decimal(holding.current_value)
        );
    }
    Ok(())
}

async fn show_recommendation(
    rebalancing: &RebalancingClient,
    customer_id: CustomerId,
) -> Result<()> {
    let recommendation = rebalancing.similar_user_portfolio(customer_id).await?;

    println!("== 추천 포트폴리오 ==");
    if let Some(risk) = recommendation.risk_profile_type {
        println!("투자성향: {}", risk.label());
    }
    let weights = recommendation.recommended_weights();
    println!(
        "추천 비중: 현금 {}% / 예금 {}% / 펀드 {}%",
        weights.cash, weights.deposit, weights.fund
    );
    if let Some(metadata) = &recommendation.metadata {
        if let (Some(total), Some(similar)) =
            (metadata.total_users_analyzed, metadata.similar_users_found)
        {
            println!("분석 대상 {}명 중 유사 사용자 {}명", total, similar);
        }
    }
    Ok(())
}

async fn run_simulation(
    rebalancing: RebalancingClient,
    customer_id: CustomerId,
    weights: Option<PortfolioWeights>,
) -> Result<()> {
    let mut session = RebalancingSession::new(Arc::new(rebalancing), customer_id);
    session.initialize().await;

    let kind = match weights {
        Some(weights) => {
            session.set_custom_weights(weights);
            SimulationKind::Custom
        }
        None => SimulationKind::Recommended,
    };

    if let Some(assessment) = session.risk_assessment() {
        println!(
            "위험도 평가: {} (편차 {}%) - {}",
            assessment.level.label(),
            assessment.total_deviation,
            assessment.message
        );
    }

    let job = session.simulate(kind).await?;
    print_job(&job);

    let actions = session.available_actions();
    if actions.can_approve {
        println!(
            "승인하려면: inplan approve {}",
            job.job_id
        );
    }
    Ok(())
}

fn print_job(job: &RebalancingJob) {
    println!(
        "== 리밸런싱 작업 #{} ({}) 상태 {} ==",
        job.job_id,
        job.trigger_type.label(),
        job.status.label()
    );

    for (title, snapshot) in [
        ("현재", &job.current_portfolio),
        ("목표", &job.target_portfolio),
        ("예상", &job.expected_portfolio),
    ] {
        let slices = allocation_slices(snapshot);
        println!(
            "  {} 포트폴리오: {} {}% / {} {}% / {} {}%",
            title,
            slices[0].label,
            slices[0].weight,
            slices[1].label,
            slices[1].weight,
            slices[2].label,
            slices[2].weight
        );
    }

    let summary = OrderFlowSummary::from_orders(&job.orders);
    println!(
        "  주문: {} {}건 {} / {} {}건 {}",
        summary.buy.label,
        summary.buy.count,
        Money::won_decimal(summary.buy.amount),
        summary.sell.label,
        summary.sell.count,
        Money::won_decimal(summary.sell.amount)
    );
    for order in &job.orders {
        println!(
            "    [{}] {} {} (좌수 {}, 수수료 {}) - {}",
            order.order_type.label(),
            order.fund_name,
            Money::won_decimal(order.order_amount),
            order.order_units,
            Money::won_decimal(order.fee),
            order.reason
        );
    }
    println!(
        "  예상 수수료 {} / 총 주문 금액 {}",
        Money::won_decimal(job.total_fee),
        Money::won_decimal(job.total_order_amount)
    );
}

async fn show_products(insurance: &InsuranceClient, category: Option<&str>) -> Result<()> {
    let products = insurance.products(category).await?;

    println!("== 보험 상품 ==");
    for product in products {
        println!(
            "  [{}] {} ({}) 보험료 {} ~ {}",
            product.id,
            product.name,
            product.category.label(),
            Money::won_decimal(product.min_premium),
            Money::won_decimal(product.max_premium)
        );
    }
    Ok(())
}

async fn show_history(banking: &BankingClient, account_id: AccountId) -> Result<()> {
    let filter = TransactionFilter::default();
    let (start, end) = filter.date_range(today_kst());

    let page = banking
        .transaction_history(&TransactionHistoryQuery {
            account_id: Some(account_id),
            start_date: Some(start.format("%Y-%m-%d").to_string()),
            end_date: Some(end.format("%Y-%m-%d").to_string()),
            page: Some(0),
            size: Some(20),
            sort_direction: Some(filter.sort_order),
            ..Default::default()
        })
        .await?;

    println!("== 거래내역 ({}) ==", filter.summary());
    for tx in filter.apply(&page.content) {
        println!(
            "  {} {} {} {} {}",
            tx.transaction_date.format_date_korean(),
            tx.transaction_date.format_time_korean(),
            tx.description.as_deref().unwrap_or("-"),
            tx.amount_display(),
            tx.transaction_status.label()
        );
    }
    println!("총 {}건", page.total_elements);
    Ok(())
}
