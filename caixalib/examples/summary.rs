use caixalib::{formats::csv::Csv, model::Settings, report::Report, traits::ReadLedger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Пример: CSV-леджер со stdin -> сводка с настройками по умолчанию
    let transactions = Csv::read(std::io::BufReader::new(std::io::stdin()))?;
    let report = Report::build(&transactions, &Settings::default());

    let t = &report.totals;
    println!(
        "gross {:.2} | fees {:.2} | net {:.2} | commission {:.2} | profit {:.2}",
        t.gross, t.card_fees, t.net, t.commission, t.profit
    );
    for (method, bucket) in &report.by_method {
        println!("{}: {:.2} ({})", method.label(), bucket.total, bucket.count);
    }
    Ok(())
}
