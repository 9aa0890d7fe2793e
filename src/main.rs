/// Запуск преобразования данных об успеваемости студентов

use tracing_subscriber;

use studperf_ml::DataTransformation;

fn main() -> anyhow::Result<()> {
    // Инициализация логирования
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let train_path = args.next().unwrap_or_else(|| "artifacts/train.csv".to_string());
    let test_path = args.next().unwrap_or_else(|| "artifacts/test.csv".to_string());

    let transformation = DataTransformation::new();
    let output = transformation.run(&train_path, &test_path)?;

    tracing::info!(
        "Transformation complete: train {:?}, test {:?}, preprocessor at {}",
        output.train.dim(),
        output.test.dim(),
        output.preprocessor_path.display()
    );

    Ok(())
}
