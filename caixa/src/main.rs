use caixalib::{
    error::{CaixaError, Result},
    formats::csv::Csv,
    model::{CommissionBase, Settings},
    report::{filter_by_barber, Period, Report},
    traits::{ReadLedger, WriteReport},
};
use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use rust_decimal::{Decimal, RoundingStrategy};
use std::fs::File;
use std::io::{self, BufReader, Write};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Base {
    Gross,
    Net,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum PeriodArg {
    Today,
    Week,
    Month,
    All,
    Custom,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ReportKind {
    Summary,
    Methods,
}

#[derive(Parser, Debug)]
#[command(
    name = "caixa",
    version,
    about = "Кассовые отчёты барбершопа: эквайринг, комиссии, разбивка по способам оплаты"
)]
struct Cli {
    /// Входной CSV-леджер (по умолчанию stdin)
    #[arg(short = 'i', long = "input")]
    input: Option<String>,

    /// Выходной файл (по умолчанию stdout)
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Процент эквайринга по дебетовым картам
    #[arg(long = "debit-fee", default_value = "1.5")]
    debit_fee: Decimal,

    /// Процент эквайринга по кредитным картам
    #[arg(long = "credit-fee", default_value = "3.0")]
    credit_fee: Decimal,

    /// База расчёта комиссии
    #[arg(long = "base", value_enum, default_value_t = Base::Gross)]
    base: Base,

    /// Отчётный период
    #[arg(long = "period", value_enum, default_value_t = PeriodArg::All)]
    period: PeriodArg,

    /// Начало периода для --period custom (YYYY-MM-DD)
    #[arg(long = "from")]
    from: Option<NaiveDate>,

    /// Конец периода для --period custom (YYYY-MM-DD)
    #[arg(long = "to")]
    to: Option<NaiveDate>,

    /// Оставить только транзакции одного мастера
    #[arg(long = "barber")]
    barber: Option<String>,

    /// Вид отчёта
    #[arg(long = "report", value_enum, default_value_t = ReportKind::Summary)]
    report: ReportKind,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // reader
    let reader: Box<dyn io::Read> = match &cli.input {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::stdin()),
    };
    let mut transactions = Csv::read(BufReader::new(reader))?;
    log::debug!("ledger: {} transactions", transactions.len());

    if let Some(name) = &cli.barber {
        transactions = filter_by_barber(&transactions, name);
        log::debug!("barber filter '{name}': {} left", transactions.len());
    }

    let period = match cli.period {
        PeriodArg::All => None,
        PeriodArg::Today => Some(Period::Today),
        PeriodArg::Week => Some(Period::Week),
        PeriodArg::Month => Some(Period::Month),
        PeriodArg::Custom => {
            let (Some(start), Some(end)) = (cli.from, cli.to) else {
                return Err(CaixaError::Parse(
                    "--period custom требует --from и --to".into(),
                ));
            };
            Some(Period::Custom { start, end })
        }
    };
    if let Some(p) = period {
        transactions = p.filter(&transactions, Local::now().date_naive());
    }

    let settings = Settings {
        debit_card_fee_percent: cli.debit_fee,
        credit_card_fee_percent: cli.credit_fee,
        commission_base: match cli.base {
            Base::Gross => CommissionBase::Gross,
            Base::Net => CommissionBase::Net,
        },
    };
    log::debug!(
        "settings: debit {}%, credit {}%, base {:?}",
        settings.debit_card_fee_percent,
        settings.credit_card_fee_percent,
        settings.commission_base
    );

    let report = Report::build(&transactions, &settings);

    // writer
    let mut writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    match cli.report {
        ReportKind::Methods => Csv::write(&mut writer, &report)?,
        ReportKind::Summary => write_summary(&mut writer, &report)?,
    }

    writer.flush().map_err(CaixaError::from)
}

fn write_summary<W: Write>(w: &mut W, report: &Report) -> Result<()> {
    let t = &report.totals;
    writeln!(w, "transactions: {}", report.transaction_count)?;
    writeln!(w, "gross:        {}", money(t.gross))?;
    writeln!(w, "card fees:    {}", money(t.card_fees))?;
    writeln!(w, "net:          {}", money(t.net))?;
    writeln!(w, "commission:   {}", money(t.commission))?;
    writeln!(w, "profit:       {}", money(t.profit))?;
    writeln!(w)?;
    for (method, bucket) in &report.by_method {
        writeln!(
            w,
            "{:<12} {:>12}  ({} часть/частей)",
            method.label(),
            money(bucket.total),
            bucket.count
        )?;
    }
    Ok(())
}

fn money(a: Decimal) -> String {
    format!(
        "{:.2}",
        a.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}
