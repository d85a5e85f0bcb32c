//! Static demo data served when the mock API is enabled.

mod clientes;
mod projetos;

pub use clientes::clientes;
pub use projetos::projetos;

use chrono::{Datelike, Local};

use crate::domain::*;

/// Credentials accepted by the fixture login.
pub const ADMIN_EMAIL: &str = "admin@opjengenharia.com.br";
pub const ADMIN_PASSWORD: &str = "admin123";

pub fn admin_user() -> User {
    User {
        id: "1".to_string(),
        name: "Administrador OPJ".to_string(),
        email: ADMIN_EMAIL.to_string(),
        role: Role::Admin,
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn usuarios() -> Vec<Usuario> {
    let usuario = |id: &str,
                   nome: &str,
                   email: &str,
                   telefone: &str,
                   cargo: &str,
                   departamento: &str,
                   status: StatusUsuario,
                   admissao: &str,
                   acesso: &str,
                   permissoes: &[&str]| Usuario {
        id: id.to_string(),
        nome: nome.to_string(),
        email: email.to_string(),
        telefone: telefone.to_string(),
        cargo: cargo.to_string(),
        departamento: departamento.to_string(),
        status,
        data_admissao: admissao.to_string(),
        ultimo_acesso: Some(acesso.to_string()),
        permissoes: strings(permissoes),
    };

    vec![
        usuario(
            "1",
            "João Silva",
            "joao.silva@opjengenharia.com.br",
            "(11) 98765-4321",
            "Engenheiro Sênior",
            "Projetos",
            StatusUsuario::Ativo,
            "2020-03-15",
            "2024-01-19 14:30",
            &["projetos", "clientes", "financeiro"],
        ),
        usuario(
            "2",
            "Maria Santos",
            "maria.santos@opjengenharia.com.br",
            "(11) 91234-5678",
            "Técnica",
            "Instalação",
            StatusUsuario::Ativo,
            "2021-07-20",
            "2024-01-19 09:15",
            &["projetos", "instalacao"],
        ),
        usuario(
            "3",
            "Carlos Oliveira",
            "carlos.oliveira@opjengenharia.com.br",
            "(11) 99876-5432",
            "Financeiro",
            "Administrativo",
            StatusUsuario::Ativo,
            "2019-11-10",
            "2024-01-18 16:45",
            &["financeiro", "relatorios"],
        ),
        usuario(
            "4",
            "Ana Costa",
            "ana.costa@opjengenharia.com.br",
            "(11) 97654-3210",
            "Assistente Administrativo",
            "Administrativo",
            StatusUsuario::Inativo,
            "2022-02-01",
            "2024-01-10 11:20",
            &["projetos"],
        ),
    ]
}

pub fn servicos() -> Vec<Servico> {
    let servico = |id: &str, nome: &str, cliente: &str, status, data: &str, valor| Servico {
        id: id.to_string(),
        nome: nome.to_string(),
        cliente: cliente.to_string(),
        status,
        data: data.to_string(),
        valor,
    };

    vec![
        servico("1", "Manutenção Preventiva", "João Silva", StatusServico::Pendente, "2024-01-15", 500.0),
        servico("2", "Instalação de Painéis", "Maria Santos", StatusServico::EmAndamento, "2024-01-20", 2500.0),
        servico("3", "Vistoria Técnica", "Carlos Oliveira", StatusServico::Concluido, "2024-01-10", 300.0),
    ]
}

pub fn transacoes() -> Vec<Transacao> {
    let transacao = |id: &str, descricao: &str, tipo, valor, data: &str, categoria: &str, status| Transacao {
        id: id.to_string(),
        descricao: descricao.to_string(),
        tipo,
        valor,
        data: data.to_string(),
        categoria: categoria.to_string(),
        status,
    };

    vec![
        transacao("1", "Pagamento Projeto Solar", TipoTransacao::Receita, 15000.0, "2024-01-15", "Projetos", StatusTransacao::Pago),
        transacao("2", "Compra de Painéis", TipoTransacao::Despesa, 8000.0, "2024-01-10", "Materiais", StatusTransacao::Pago),
        transacao("3", "Manutenção Sistema", TipoTransacao::Receita, 500.0, "2024-01-20", "Serviços", StatusTransacao::Pendente),
    ]
}

/// Events pinned to days of the current month.
pub fn eventos() -> Vec<Evento> {
    let today = Local::now().date_naive();
    let day = |d: u32| format!("{:04}-{:02}-{:02}", today.year(), today.month(), d);

    vec![
        Evento {
            id: "e1".to_string(),
            titulo: "Reuniao interna de planejamento".to_string(),
            data: day(5),
            hora: "09:30".to_string(),
            tipo: TipoEvento::Reuniao,
            local: "Escritorio OPJ".to_string(),
            participantes: strings(&["Operacoes", "Engenharia"]),
            descricao: "Ajuste de cronograma semanal".to_string(),
        },
        Evento {
            id: "e2".to_string(),
            titulo: "Vistoria de seguranca".to_string(),
            data: day(19),
            hora: "13:00".to_string(),
            tipo: TipoEvento::Vistoria,
            local: "Galpao de materiais".to_string(),
            participantes: strings(&["Tecnico responsavel"]),
            descricao: "Checklist de seguranca da equipe".to_string(),
        },
    ]
}

/// Factory settings, also the target of a reset.
pub fn configuracoes() -> ConfiguracoesSistema {
    ConfiguracoesSistema {
        nome_empresa: "OPJ Engenharia".to_string(),
        cnpj: "12.345.678/0001-99".to_string(),
        telefone: "(11) 3456-7890".to_string(),
        email: "contato@opjengenharia.com.br".to_string(),
        endereco: "Rua das Indústrias, 1234 - São Paulo/SP".to_string(),
        email_notificacoes: true,
        sms_notificacoes: false,
        notificacoes_projetos: true,
        notificacoes_financeiro: true,
        notificacoes_servicos: false,
        tema: Tema::Dark,
        idioma: "pt-BR".to_string(),
        fuso_horario: "America/Sao_Paulo".to_string(),
        formato_data: "DD/MM/YYYY".to_string(),
        backup_automatico: true,
        frequencia_backup: FrequenciaBackup::Diario,
        retencao_backup: "30".to_string(),
    }
}

pub fn database_tables() -> Vec<DatabaseTable> {
    let table = |name: &str, rows, size: &str, last_modified: &str| DatabaseTable {
        name: name.to_string(),
        rows,
        size: size.to_string(),
        last_modified: last_modified.to_string(),
        kind: TableKind::Table,
    };

    vec![
        table("projetos", 1247, "45.2 MB", "2024-01-19 14:30"),
        table("clientes", 892, "12.8 MB", "2024-01-19 13:15"),
        table("servicos", 534, "8.4 MB", "2024-01-19 16:45"),
        table("usuarios", 45, "1.2 MB", "2024-01-18 10:20"),
        table("financeiro", 2156, "67.3 MB", "2024-01-19 17:00"),
    ]
}

pub fn backups() -> Vec<Backup> {
    let backup = |id: &str, name: &str, size: &str, date: &str, kind| Backup {
        id: id.to_string(),
        name: name.to_string(),
        size: size.to_string(),
        date: date.to_string(),
        kind,
    };

    vec![
        backup("1", "backup_auto_20240119", "135.8 MB", "2024-01-19 02:00", BackupKind::Automatic),
        backup("2", "backup_manual_20240118", "134.9 MB", "2024-01-18 15:30", BackupKind::Manual),
        backup("3", "backup_auto_20240118", "134.5 MB", "2024-01-18 02:00", BackupKind::Automatic),
    ]
}

pub fn database_status() -> DatabaseStatus {
    DatabaseStatus {
        conexao: Conexao::Ativa,
        performance: Performance::Otima,
        ultima_otimizacao: "2024-01-19 03:00".to_string(),
    }
}
