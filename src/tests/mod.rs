use crate::*;
use std::path::PathBuf;

const RASPBERRY: &str = "\
mklabel msdos
mkpart primary fat32 4MiB 256MiB # label=PIBOOT mount=boot
mkpart primary ext4 256MiB 4GiB # label=PIROOT reserved=1 mount=/
mkpart primary ext4 4GiB 100% # label=PIDATA mount=var/lib/data
";

fn parse(script: &str) -> PartitionTable { script.parse().expect("failed to parse script") }

fn plan_strings(mode: Mode, script: &str) -> Vec<String> {
    plan(&mode, &parse(script), &Config::default())
        .expect("failed to plan commands")
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn device(path: &str) -> PathBuf { PathBuf::from(path) }

/// Every tool replaced with `program`, which must exist on the host.
fn tools_as(program: &str) -> Tools {
    Tools {
        parted:    program.into(),
        align:     "optimal".into(),
        partprobe: program.into(),
        partx:     program.into(),
        mkfs_vfat: program.into(),
        mkfs_ext4: program.into(),
        mkdir:     program.into(),
        mount:     program.into(),
        umount:    program.into(),
    }
}

#[test]
fn format_replays_every_line() {
    let cmds = plan_strings(Mode::Format { device: device("/dev/sdb") }, RASPBERRY);
    assert_eq!(
        cmds,
        vec![
            "parted /dev/sdb -a optimal -s mklabel msdos",
            "parted /dev/sdb -a optimal -s mkpart primary fat32 4MiB 256MiB",
            "parted /dev/sdb -a optimal -s mkpart primary ext4 256MiB 4GiB",
            "parted /dev/sdb -a optimal -s mkpart primary ext4 4GiB 100%",
            "partprobe /dev/sdb",
            "partx -vu /dev/sdb",
        ]
    );
}

#[test]
fn mkfs_single_root() {
    let cmds = plan_strings(
        Mode::Mkfs { device: device("/dev/sda") },
        "mkpart primary ext4 1MiB 100% # label=root mount=",
    );
    assert_eq!(
        cmds,
        vec!["mkfs.ext4 -L root /dev/sda1", "partprobe /dev/sda", "partx -vu /dev/sda"]
    );
}

#[test]
fn mkfs_uses_partition_naming_of_the_device() {
    let cmds = plan_strings(Mode::Mkfs { device: device("/dev/mmcblk0") }, RASPBERRY);
    assert_eq!(
        cmds,
        vec![
            "mkfs.vfat -n PIBOOT /dev/mmcblk0p1",
            "mkfs.ext4 -L PIROOT -m 1 /dev/mmcblk0p2",
            "mkfs.ext4 -L PIDATA /dev/mmcblk0p3",
            "partprobe /dev/mmcblk0",
            "partx -vu /dev/mmcblk0",
        ]
    );
}

#[test]
fn mkfs_numbers_ignore_passthrough_lines() {
    let script = "\
mklabel msdos
mkpart primary fat32 1MiB 64MiB
mkpart extended 64MiB 100%
mkpart logical ext4 65MiB 100%
";
    let cmds = plan_strings(Mode::Mkfs { device: device("/dev/loop0") }, script);
    assert_eq!(cmds[0], "mkfs.vfat /dev/loop0p1");
    assert_eq!(cmds[1], "mkfs.ext4 /dev/loop0p2");
}

#[test]
fn mkfs_rejects_unsupported_file_systems() {
    let script = "\
mkpart primary ext4 1MiB 1GiB
mkpart primary btrfs 1GiB 100%
";
    let mode = Mode::Mkfs { device: device("/dev/sda") };
    let result = plan(&mode, &parse(script), &Config::default());
    match result {
        Err(Error::UnsupportedFileSystem(2, why)) => assert_eq!(&*why.0, "btrfs"),
        other => panic!("expected an unsupported file system error, got {:?}", other),
    }
}

#[test]
fn mount_parents_first() {
    let mode = Mode::Mount { device: device("/dev/sda"), prefix: device("/mnt/target") };
    let cmds = plan_strings(mode, RASPBERRY);
    assert_eq!(
        cmds,
        vec![
            "mkdir -p /mnt/target",
            "mount /dev/sda2 /mnt/target",
            "mkdir -p /mnt/target/boot",
            "mount /dev/sda1 /mnt/target/boot",
            "mkdir -p /mnt/target/var/lib/data",
            "mount /dev/sda3 /mnt/target/var/lib/data",
        ]
    );
}

#[test]
fn umount_is_the_reverse_of_mount() {
    let script = "\
mkpart primary ext4 1MiB 1GiB # mount=srv
mkpart primary ext4 1GiB 2GiB # mount=srv/www/static
mkpart primary ext4 2GiB 3GiB
mkpart primary ext4 3GiB 100% # mount=srv/www
";
    let mode = Mode::Mount { device: device("/dev/vda"), prefix: device("/target") };
    let mount = plan_strings(mode, script);
    let mounted: Vec<&str> = mount
        .iter()
        .filter(|cmd| cmd.starts_with("mount "))
        .map(|cmd| cmd.split(' ').nth(1).unwrap())
        .collect();
    assert_eq!(mounted, vec!["/dev/vda1", "/dev/vda4", "/dev/vda2"]);

    let umount = plan_strings(Mode::Umount { device: device("/dev/vda") }, script);
    assert_eq!(umount, vec!["umount /dev/vda2", "umount /dev/vda4", "umount /dev/vda1"]);
}

#[test]
fn nothing_to_mount() {
    let script = "mklabel gpt\nmkpart primary ext4 1MiB 100%\n";
    let mode = Mode::Mount { device: device("/dev/sda"), prefix: device("/mnt") };
    assert!(plan_strings(mode, script).is_empty());
    assert!(plan_strings(Mode::Umount { device: device("/dev/sda") }, script).is_empty());
}

#[test]
fn print_size() {
    let script = "mkpart primary ext4 1MiB 4GiB\n";
    let expected = (4 * GIB + 2 * GIB) / 4096 * 4096;

    let mut out = Vec::new();
    run(&Mode::PrintSize, script, &Config::default(), "disk", &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", expected));
}

#[test]
fn print_size_is_repeatable() {
    let size = || {
        let mut out = Vec::new();
        run(&Mode::PrintSize, RASPBERRY, &Config::default(), "disk", &mut out).unwrap();
        String::from_utf8(out).unwrap()
    };

    let first = size();
    assert_eq!(first, format!("{}\n", 4 * GIB + 2 * GIB));
    assert_eq!(first, size());
}

#[test]
fn script_errors_run_nothing() {
    let mut out = Vec::new();
    let result = run(
        &Mode::Format { device: device("/dev/sda") },
        "mklabel gpt\nmkpart primary ext4\n",
        &Config::default(),
        "disk",
        &mut out,
    );

    match result {
        Err(Error::Script(script::Error::ShortMkpart(2, _))) => (),
        other => panic!("expected a script error, got {:?}", other),
    }

    assert!(out.is_empty());
}

#[test]
fn dry_run_echoes_the_plan() {
    let config = Config { dry_run: true, tools: tools_as("true"), ..Config::default() };

    let mut out = Vec::new();
    let mode = Mode::Umount { device: device("/dev/sda") };
    run(&mode, RASPBERRY, &config, "disk", &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "CMD [ disk ] ==> true /dev/sda3\n\
         CMD [ disk ] ==> true /dev/sda1\n\
         CMD [ disk ] ==> true /dev/sda2\n"
    );
}

#[test]
fn executes_with_stand_in_tools() {
    let config = Config { tools: tools_as("true"), ..Config::default() };

    let mut out = Vec::new();
    run(&Mode::Mkfs { device: device("/dev/sda") }, RASPBERRY, &config, "disk", &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 5);
}

#[test]
fn failing_command_aborts_the_sequence() {
    let config = Config {
        tools: Tools { mkfs_ext4: "false".into(), ..tools_as("true") },
        ..Config::default()
    };

    let mut out = Vec::new();
    let mode = Mode::Mkfs { device: device("/dev/sda") };
    let result = run(&mode, RASPBERRY, &config, "disk", &mut out);

    match result {
        Err(Error::Command("mkfs", disk_ops::Error::Status(cmd, _))) => {
            assert_eq!(cmd.to_string(), "false -L PIROOT -m 1 /dev/sda2");
        }
        other => panic!("expected a command failure, got {:?}", other),
    }

    // The vfat partition was created, and the failing ext4 command was the last attempted.
    let echoed = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = echoed.lines().collect();
    assert_eq!(
        lines,
        vec![
            "CMD [ disk ] ==> true -n PIBOOT /dev/sda1",
            "CMD [ disk ] ==> false -L PIROOT -m 1 /dev/sda2",
        ]
    );
}

#[test]
fn missing_tools_abort_before_anything_runs() {
    let config = Config {
        tools: Tools { partx: "no-such-partx".into(), ..tools_as("true") },
        ..Config::default()
    };

    let mut out = Vec::new();
    let mode = Mode::Format { device: device("/dev/sda") };
    let result = run(&mode, RASPBERRY, &config, "disk", &mut out);

    match result {
        Err(Error::Command("format", disk_ops::Error::NotFound(program, _))) => {
            assert_eq!(&*program, "no-such-partx")
        }
        other => panic!("expected a missing program, got {:?}", other),
    }

    assert!(out.is_empty());
}
