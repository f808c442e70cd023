use std::{fs, path::PathBuf};

use alloy_primitives::{hex, keccak256, Bytes, B256};
use clap::{Parser, Subcommand, ValueEnum};
use eyre::WrapErr;
use serde::Serialize;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use infrasound_pipeline::{
    has_infrasound_selector, BlobParams, BuilderConfig, BurnInfo, BurnPolicy,
    InfrasoundDepositBuilder, L1BlockHeader,
};

#[derive(Parser)]
#[command(name = "infrasound")]
#[command(about = "Encode and decode infrasound burn-info deposits")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode burn info into `report(uint64,uint64)` calldata
    Encode {
        /// L1 block timestamp
        #[arg(long)]
        timestamp: u64,

        /// Fees burned on L1
        #[arg(long)]
        burn: u64,
    },

    /// Decode burn info from hex calldata
    Decode {
        /// 68 bytes of calldata, hex (0x prefix optional)
        calldata: String,
    },

    /// Build the serialized burn-info deposit for an L1 block header
    Deposit {
        /// L1 block header JSON (the `result` of eth_getBlockByNumber)
        #[arg(long, env = "INFRASOUND_HEADER")]
        header: PathBuf,

        /// L2 sequence number within the epoch
        #[arg(long, env = "INFRASOUND_SEQ", default_value = "0")]
        seq: u64,

        /// Overflow handling for basefee * gasUsed + blobBaseFee
        #[arg(long, env = "INFRASOUND_BURN_POLICY", default_value_t = BurnPolicy::Wrapping)]
        burn_policy: BurnPolicy,

        /// Blob fee schedule used when the header only carries excessBlobGas
        #[arg(long, value_enum, default_value_t = BlobSchedule::Prague)]
        blob_schedule: BlobSchedule,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum BlobSchedule {
    Cancun,
    Prague,
}

impl BlobSchedule {
    fn params(self) -> BlobParams {
        match self {
            Self::Cancun => BlobParams::cancun(),
            Self::Prague => BlobParams::prague(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DepositOutput {
    l1_block_number: u64,
    l1_block_hash: B256,
    sequence_number: u64,
    burn_info: BurnInfo,
    source_hash: B256,
    tx_hash: B256,
    raw: Bytes,
}

fn main() -> eyre::Result<()> {
    // logs go to stderr, stdout only carries results
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("info,infrasound=debug,infrasound_pipeline=debug")
        }))
        .init();

    let args = Args::parse();

    match args.command {
        Command::Encode { timestamp, burn } => {
            let calldata = BurnInfo::new(timestamp, burn).to_calldata();
            debug!(timestamp, burn, len = calldata.len(), "encoded burn info");
            println!("{}", hex::encode_prefixed(&calldata));
        }
        Command::Decode { calldata } => {
            let data = hex::decode(calldata.trim()).wrap_err("calldata is not valid hex")?;
            if !has_infrasound_selector(&data) {
                warn!(
                    selector = %hex::encode_prefixed(&data[..data.len().min(4)]),
                    "calldata does not start with the report(uint64,uint64) selector"
                );
            }
            let info = BurnInfo::decode_calldata(&data)?;
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        Command::Deposit { header, seq, burn_policy, blob_schedule } => {
            let json = fs::read_to_string(&header)
                .wrap_err_with(|| format!("failed to read {}", header.display()))?;
            let header: L1BlockHeader =
                serde_json::from_str(&json).wrap_err("failed to parse L1 block header")?;
            let block = header.to_block_info(&blob_schedule.params())?;

            info!(
                number = block.number,
                hash = %block.hash,
                seq,
                %burn_policy,
                "building infrasound deposit"
            );

            let config = BuilderConfig::builder().burn_policy(burn_policy).build();
            let builder = InfrasoundDepositBuilder::new(config);
            let deposit = builder.build_deposit(seq, &block)?;
            let raw = deposit.to_bytes();

            let output = DepositOutput {
                l1_block_number: block.number,
                l1_block_hash: block.hash,
                sequence_number: seq,
                burn_info: BurnInfo::from_deposit(&deposit)?,
                source_hash: deposit.source_hash,
                tx_hash: keccak256(&raw),
                raw,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
