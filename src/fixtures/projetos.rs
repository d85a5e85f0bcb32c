use super::clientes::clientes;
use crate::domain::*;

fn s(value: &str) -> String {
    value.to_string()
}

fn endereco(
    cep: &str,
    logradouro: &str,
    numero: &str,
    complemento: &str,
    bairro: &str,
    cidade: &str,
) -> Endereco {
    Endereco {
        cep: s(cep),
        logradouro: s(logradouro),
        numero: s(numero),
        complemento: s(complemento),
        bairro: s(bairro),
        cidade: s(cidade),
        estado: s("SP"),
    }
}

fn etapa(id: &str, nome: &str, data: &str, status: StatusEtapa, descricao: Option<&str>) -> TimelineItem {
    TimelineItem {
        id: s(id),
        etapa: s(nome),
        data: s(data),
        status,
        descricao: descricao.map(s),
    }
}

fn documento(id: &str, nome: &str, tipo: &str, data_upload: &str, tamanho: u64) -> Documento {
    Documento {
        id: s(id),
        nome: s(nome),
        tipo: s(tipo),
        data_upload: s(data_upload),
        tamanho,
    }
}

fn divisao(uc: &str, classe: &str, endereco: &str) -> DivisaoCreditos {
    DivisaoCreditos {
        percentual: 100.0,
        uc: s(uc),
        classe: s(classe),
        endereco: s(endereco),
    }
}

/// The three demo projects, `PROJ-2024-001` to `PROJ-2024-003`.
pub fn projetos() -> Vec<Projeto> {
    let [joao, maria, empresa_abc, _, _] = clientes();

    vec![
        Projeto {
            id: s("1"),
            protocolo: s("PROJ-2024-001"),
            cliente: joao,
            endereco: endereco("01234-567", "Rua das Flores", "123", "Apto 45", "Jardins", "São Paulo"),
            dados_projeto: DadosProjeto {
                concessionaria: s("AES Eletropaulo"),
                classe: s("Residencial"),
                integrador: s("OPJ Engenharia"),
                modalidade: Modalidade::GeracaoCompartilhada,
                enquadramento: s("Microgeração Distribuída"),
                potencia_sistema: 5.5,
                protecao_cc: s("Dissipador de Surto"),
            },
            dados_tecnicos: DadosTecnicos {
                tensao: 220,
                numero_fases: 2,
                ramal: s("Aéreo"),
                disjuntor: s("50A"),
                carga_instalada: 12000.0,
            },
            modulos: vec![Modulo {
                id: s("1"),
                fabricante: s("Canadian Solar"),
                modelo: s("CS6L-MS"),
                potencia: 550.0,
                quantidade: 10,
                potencia_pico: 5.5,
            }],
            inversores: vec![Inversor {
                id: s("1"),
                fabricante: s("Growatt"),
                modelo: s("MIC 600 TL-X"),
                potencia: 600.0,
                quantidade: 10,
                potencia_total: 6.0,
            }],
            divisao_creditos: vec![divisao(
                "123456789",
                "Residencial",
                "Rua das Flores, 123 - Jardins, São Paulo/SP",
            )],
            timeline: vec![
                etapa("1", "Cadastro do Cliente", "2024-01-15", StatusEtapa::Concluido, Some("Dados do cliente cadastrados no sistema")),
                etapa("2", "Análise Técnica", "2024-01-20", StatusEtapa::Concluido, Some("Viabilidade técnica aprovada")),
                etapa("3", "Submissão Concessionária", "2024-01-25", StatusEtapa::EmAndamento, Some("Aguardando aprovação da concessionária")),
            ],
            documentos: vec![
                documento("1", "ART.pdf", "ART", "2024-01-15", 1_024_000),
                documento("2", "Memorial_Descritivo.pdf", "Memorial", "2024-01-18", 2_048_000),
            ],
            status: StatusProjeto::EmAndamento,
            data_criacao: s("2024-01-15"),
            data_atualizacao: s("2024-01-25"),
        },
        Projeto {
            id: s("2"),
            protocolo: s("PROJ-2024-002"),
            cliente: maria,
            endereco: endereco("04567-890", "Avenida Paulista", "1000", "", "Bela Vista", "São Paulo"),
            dados_projeto: DadosProjeto {
                concessionaria: s("Eletropaulo"),
                classe: s("Comercial"),
                integrador: s("OPJ Engenharia"),
                modalidade: Modalidade::Autoconsumo,
                enquadramento: s("Minigeração Distribuída"),
                potencia_sistema: 15.0,
                protecao_cc: s("Fusível CC"),
            },
            dados_tecnicos: DadosTecnicos {
                tensao: 380,
                numero_fases: 3,
                ramal: s("Subterrâneo"),
                disjuntor: s("100A"),
                carga_instalada: 45000.0,
            },
            modulos: vec![Modulo {
                id: s("2"),
                fabricante: s("Trina Solar"),
                modelo: s("TSM-DE15"),
                potencia: 550.0,
                quantidade: 28,
                potencia_pico: 15.4,
            }],
            inversores: vec![Inversor {
                id: s("2"),
                fabricante: s("Sungrow"),
                modelo: s("SG15RT"),
                potencia: 15000.0,
                quantidade: 1,
                potencia_total: 15.0,
            }],
            divisao_creditos: vec![divisao(
                "987654321",
                "Comercial",
                "Avenida Paulista, 1000 - Bela Vista, São Paulo/SP",
            )],
            timeline: vec![
                etapa("4", "Cadastro do Cliente", "2024-02-01", StatusEtapa::Concluido, None),
                etapa("5", "Análise Técnica", "2024-02-05", StatusEtapa::Concluido, None),
                etapa("6", "Instalação", "2024-02-10", StatusEtapa::Pendente, None),
            ],
            documentos: vec![documento("3", "Projeto_Eletrico.dwg", "Projeto", "2024-02-03", 5_120_000)],
            status: StatusProjeto::Aprovado,
            data_criacao: s("2024-02-01"),
            data_atualizacao: s("2024-02-05"),
        },
        Projeto {
            id: s("3"),
            protocolo: s("PROJ-2024-003"),
            cliente: empresa_abc,
            endereco: endereco("07890-123", "Rua Industrial", "500", "Galpão 3", "Centro", "Guarulhos"),
            dados_projeto: DadosProjeto {
                concessionaria: s("ENEL"),
                classe: s("Industrial"),
                integrador: s("OPJ Engenharia"),
                modalidade: Modalidade::Autoconsumo,
                enquadramento: s("Minigeração Distribuída"),
                potencia_sistema: 50.0,
                protecao_cc: s("Disjuntor CC"),
            },
            dados_tecnicos: DadosTecnicos {
                tensao: 13800,
                numero_fases: 3,
                ramal: s("Aéreo"),
                disjuntor: s("200A"),
                carga_instalada: 150000.0,
            },
            modulos: vec![Modulo {
                id: s("3"),
                fabricante: s("Jinko Solar"),
                modelo: s("JKM550M-72HL"),
                potencia: 550.0,
                quantidade: 92,
                potencia_pico: 50.6,
            }],
            inversores: vec![Inversor {
                id: s("3"),
                fabricante: s("Fronius"),
                modelo: s("Symo 20.0-3-M"),
                potencia: 20000.0,
                quantidade: 3,
                potencia_total: 60.0,
            }],
            divisao_creditos: vec![divisao(
                "456789012",
                "Industrial",
                "Rua Industrial, 500 - Centro, Guarulhos/SP",
            )],
            timeline: vec![
                etapa("7", "Cadastro do Cliente", "2024-02-15", StatusEtapa::Concluido, None),
                etapa("8", "Análise Técnica", "2024-02-20", StatusEtapa::EmAndamento, None),
            ],
            documentos: vec![documento("4", "Laudo_Tecnico.pdf", "Laudo", "2024-02-18", 3_072_000)],
            status: StatusProjeto::EmAndamento,
            data_criacao: s("2024-02-15"),
            data_atualizacao: s("2024-02-20"),
        },
    ]
}
