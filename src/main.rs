use anyhow::Result;
use career_advisor::utils::logging;
use career_advisor::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置（命令行第一个参数为答案文件）
    let config = Config::from_env().with_args(std::env::args().skip(1));

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    let succeeded = App::initialize(config)?.run().await?;
    if !succeeded {
        std::process::exit(1);
    }

    Ok(())
}
